//! Game session - input handling, animation loop and start/pause/game over.
//!
//! A [`Game`] owns everything one player session touches: the board, the
//! account, the HUD, the drop timer, the drawing surface and the frame
//! scheduler. The host loop feeds it key presses through
//! [`handle_key`](Game::handle_key) and frame ticks through
//! [`on_frame`](Game::on_frame); both take the current time in milliseconds.
//!
//! # Loop states
//!
//! | State | Frame scheduled | Session |
//! |-------|-----------------|---------|
//! | `Stopped` | no | none (before the first game, after game over) |
//! | `Running` | yes (exactly one) | active |
//! | `Paused` | no | active, state kept |
//!
//! Every path that schedules a frame cancels the previous handle first, so at
//! most one frame is ever pending.

use tracing::{debug, info};

use crate::account::{Account, Field};
use crate::core::hud::{self, Display, Hud};
use crate::core::{advance_lines, drop_interval_ms, line_clear_points, Board, Surface};
use crate::moves;
use crate::scheduler::{FrameHandle, FrameScheduler};
use crate::timing::Timing;
use crate::types::{Font, KeyAction, Move, Rgb, HARD_DROP_POINTS, SOFT_DROP_POINTS};

/// Banner drawn behind the PAUSED / GAME OVER text: (x, y, w, h) in cells.
const BANNER: (u16, u16, u16, u16) = (1, 9, 8, 1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Stopped,
    Running,
    Paused,
}

pub struct Game<S> {
    ctx: S,
    board: Board,
    account: Account,
    hud: Hud,
    time: Timing,
    scheduler: FrameScheduler,
    request_id: Option<FrameHandle>,
    due: Vec<FrameHandle>,
    active: bool,
    listening: bool,
}

impl<S: Surface> Game<S> {
    pub fn new(ctx: S, seed: u32) -> Self {
        Self::with_hud(ctx, seed, Hud::new())
    }

    pub fn with_hud(ctx: S, seed: u32, hud: Hud) -> Self {
        Self {
            ctx,
            board: Board::new(seed),
            account: Account::new(),
            hud,
            time: Timing::new(0, drop_interval_ms(0)),
            scheduler: FrameScheduler::new(),
            request_id: None,
            due: Vec::with_capacity(4),
            active: false,
            listening: false,
        }
    }

    pub fn ctx(&self) -> &S {
        &self.ctx
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    pub fn time(&self) -> &Timing {
        &self.time
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    /// Handle of the scheduled frame, `None` while paused or stopped
    pub fn request_id(&self) -> Option<FrameHandle> {
        self.request_id
    }

    pub fn state(&self) -> LoopState {
        if !self.active {
            LoopState::Stopped
        } else if self.request_id.is_some() {
            LoopState::Running
        } else {
            LoopState::Paused
        }
    }

    /// Dispatch a key press. Returns true when the key was consumed.
    ///
    /// Only the Play control works before the first game. Escape ends (or
    /// re-ends) the session any time after that; pause and piece moves need an
    /// active session, paused or running.
    pub fn handle_key(&mut self, action: KeyAction, now: u64) -> bool {
        match action {
            KeyAction::Play => {
                if !self.hud.is_visible(hud::PLAY_BTN) {
                    return false;
                }
                self.play(now);
                true
            }
            KeyAction::Quit => false,
            _ if !self.listening => false,
            KeyAction::Escape => {
                self.game_over(now);
                true
            }
            _ if !self.active => false,
            KeyAction::Pause => {
                // Nothing else is bound to the pause key, so the toggle ends the press.
                self.pause(now);
                true
            }
            KeyAction::Move(mv) => {
                self.apply_move(mv);
                true
            }
        }
    }

    fn apply_move(&mut self, mv: Move) {
        // A hard-dropped piece only waits for the next gravity tick to lock.
        if self.board.piece().hard_dropped {
            return;
        }

        let mut p = moves::apply(mv, self.board.piece(), &self.board);
        if mv == Move::HardDrop {
            while self.board.valid(&p) {
                self.account.add(Field::Score, HARD_DROP_POINTS, &mut self.hud);
                self.board.move_piece(p);
                p = moves::apply(Move::Down, self.board.piece(), &self.board);
            }
            self.board.hard_drop();
        } else if self.board.valid(&p) {
            self.board.move_piece(p);
            if mv == Move::Down {
                self.account.add(Field::Score, SOFT_DROP_POINTS, &mut self.hud);
            }
        }
    }

    /// Start a new game, or resume when the Play control was shown by a pause.
    pub fn play(&mut self, now: u64) {
        if self.hud.display(hud::PLAY_BTN) == Display::Initial {
            self.reset_game(now);
            info!("new game");
        }

        self.cancel_frame();
        self.active = true;
        self.listening = true;
        self.animate(now);
        if !self.active {
            // The first frame already ended the game.
            return;
        }

        self.hud.set_display(hud::PLAY_BTN, Display::None);
        self.hud.set_display(hud::PAUSE_BTN, Display::Block);
    }

    /// Toggle between running and paused. No-op without a session.
    pub fn pause(&mut self, now: u64) {
        if !self.active {
            return;
        }

        if self.request_id.is_none() {
            self.hud.set_display(hud::PLAY_BTN, Display::None);
            self.hud.set_display(hud::PAUSE_BTN, Display::Block);
            info!("resumed");
            self.animate(now);
            return;
        }

        self.cancel_frame();
        self.draw_banner("PAUSED", 4, Rgb::YELLOW);
        self.hud.set_display(hud::PLAY_BTN, Display::Block);
        self.hud.set_display(hud::PAUSE_BTN, Display::None);
        info!(score = self.account.score(), "paused");
    }

    /// End the session: stop the loop, show GAME OVER, reset everything.
    pub fn game_over(&mut self, now: u64) {
        self.cancel_frame();
        self.draw_banner("GAME OVER", 3, Rgb::RED);
        info!(
            score = self.account.score(),
            level = self.account.level(),
            lines = self.account.lines(),
            "game over"
        );

        self.reset_game(now);
        self.active = false;
        self.hud.set_display(hud::PAUSE_BTN, Display::None);
        self.hud.set_display(hud::PLAY_BTN, Display::Initial);
    }

    /// Fire the frames that are due. Called by the host loop once per tick.
    pub fn on_frame(&mut self, now: u64) {
        let mut due = std::mem::take(&mut self.due);
        self.scheduler.take_due_into(&mut due);
        for _ in due.iter() {
            self.animate(now);
        }
        self.due = due;
    }

    fn animate(&mut self, now: u64) {
        let drop_due = self.time.advance(now);
        if drop_due {
            self.time.start = now;
            if !self.drop_piece() {
                self.game_over(now);
                return;
            }
        }

        self.ctx.clear();
        self.board.draw(&mut self.ctx);
        self.request_id = Some(self.scheduler.request());
    }

    fn drop_piece(&mut self) -> bool {
        let alive = self.board.drop();
        if let Some(cleared) = self.board.take_line_clear() {
            self.apply_line_clear(cleared);
        }
        alive
    }

    fn apply_line_clear(&mut self, cleared: u32) {
        let level = self.account.level();
        let points = line_clear_points(cleared, level);
        self.account.add(Field::Score, points, &mut self.hud);

        let progress = advance_lines(level, self.account.lines(), cleared);
        self.account.set(Field::Lines, progress.lines, &mut self.hud);
        if progress.leveled_up {
            self.account.set(Field::Level, progress.level, &mut self.hud);
            self.time.level = drop_interval_ms(progress.level) as u64;
            info!(level = progress.level, interval_ms = self.time.level, "level up");
        }
        debug!(cleared, points, score = self.account.score(), "lines cleared");
    }

    fn reset_game(&mut self, now: u64) {
        self.account.reset(&mut self.hud);
        self.board.reset();
        self.time = Timing::new(now, drop_interval_ms(self.account.level()));
    }

    fn cancel_frame(&mut self) {
        if let Some(handle) = self.request_id.take() {
            self.scheduler.cancel(handle);
        }
    }

    fn draw_banner(&mut self, text: &str, text_x: u16, color: Rgb) {
        let (x, y, w, h) = BANNER;
        self.ctx.set_fill_style(Rgb::BLACK);
        self.ctx.fill_rect(x, y, w, h);
        self.ctx.set_font(Font::Bold);
        self.ctx.set_fill_style(color);
        self.ctx.fill_text(text, text_x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Piece;
    use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

    /// Surface that records text and counts clears.
    #[derive(Debug, Default)]
    struct Recorder {
        texts: Vec<(String, Rgb)>,
        clears: usize,
        fills: usize,
        style: Rgb,
    }

    impl Surface for Recorder {
        fn width(&self) -> u16 {
            BOARD_WIDTH as u16
        }

        fn height(&self) -> u16 {
            BOARD_HEIGHT as u16
        }

        fn clear_rect(&mut self, _x: u16, _y: u16, _w: u16, _h: u16) {
            self.clears += 1;
        }

        fn fill_rect(&mut self, _x: u16, _y: u16, _w: u16, _h: u16) {
            self.fills += 1;
        }

        fn set_fill_style(&mut self, color: Rgb) {
            self.style = color;
        }

        fn set_font(&mut self, _font: Font) {}

        fn fill_text(&mut self, text: &str, _x: u16, _y: u16) {
            self.texts.push((text.to_string(), self.style));
        }
    }

    fn running_game(kind: PieceKind) -> Game<Recorder> {
        let mut game = Game::new(Recorder::default(), 42);
        game.play(0);
        game.board_mut().set_piece(Piece::new(kind));
        game
    }

    #[test]
    fn test_new_game_is_stopped() {
        let game = Game::new(Recorder::default(), 1);
        assert_eq!(game.state(), LoopState::Stopped);
        assert_eq!(game.scheduler().pending_count(), 0);
        assert!(game.hud().is_visible(hud::PLAY_BTN));
        assert!(!game.hud().is_visible(hud::PAUSE_BTN));
    }

    #[test]
    fn test_play_schedules_one_frame_and_swaps_controls() {
        let mut game = Game::new(Recorder::default(), 1);
        game.play(100);

        assert_eq!(game.state(), LoopState::Running);
        assert_eq!(game.scheduler().pending_count(), 1);
        assert_eq!(game.hud().display(hud::PLAY_BTN), Display::None);
        assert_eq!(game.hud().display(hud::PAUSE_BTN), Display::Block);
        assert_eq!(game.time().start, 100);
        assert_eq!(game.time().level, 800);
        assert_eq!(game.ctx().clears, 1);
    }

    #[test]
    fn test_double_play_keeps_one_frame() {
        let mut game = Game::new(Recorder::default(), 1);
        game.play(0);
        let first = game.request_id();
        game.play(5);

        assert_eq!(game.scheduler().pending_count(), 1);
        assert_ne!(game.request_id(), first);
        assert!(game.scheduler().is_pending(game.request_id().unwrap()));
    }

    #[test]
    fn test_pause_toggles_and_draws_overlay() {
        let mut game = running_game(PieceKind::T);

        game.pause(10);
        assert_eq!(game.state(), LoopState::Paused);
        assert_eq!(game.scheduler().pending_count(), 0);
        assert_eq!(game.hud().display(hud::PLAY_BTN), Display::Block);
        assert_eq!(game.hud().display(hud::PAUSE_BTN), Display::None);
        assert_eq!(
            game.ctx().texts.last(),
            Some(&("PAUSED".to_string(), Rgb::YELLOW))
        );

        game.pause(20);
        assert_eq!(game.state(), LoopState::Running);
        assert_eq!(game.scheduler().pending_count(), 1);
        assert_eq!(game.hud().display(hud::PAUSE_BTN), Display::Block);
    }

    #[test]
    fn test_pause_key_never_leaves_two_frames() {
        let mut game = running_game(PieceKind::T);
        for i in 0..9 {
            assert!(game.handle_key(KeyAction::Pause, i));
            assert!(game.scheduler().pending_count() <= 1);
        }
        // Odd number of toggles: paused.
        assert_eq!(game.state(), LoopState::Paused);
        assert_eq!(game.scheduler().pending_count(), 0);
    }

    #[test]
    fn test_play_resumes_without_reset() {
        let mut game = running_game(PieceKind::T);
        game.handle_key(KeyAction::Move(Move::Down), 1);
        game.pause(2);
        assert_eq!(game.account().score(), 1);

        assert!(game.handle_key(KeyAction::Play, 3));
        assert_eq!(game.state(), LoopState::Running);
        assert_eq!(game.account().score(), 1);
        // Play is hidden while running; pressing it again does nothing.
        assert!(!game.handle_key(KeyAction::Play, 4));
    }

    #[test]
    fn test_moves_commit_the_candidate() {
        let mut game = running_game(PieceKind::T);
        let start = *game.board().piece();

        game.handle_key(KeyAction::Move(Move::Left), 1);
        assert_eq!(*game.board().piece(), start.shifted(-1, 0));

        game.handle_key(KeyAction::Move(Move::Right), 1);
        game.handle_key(KeyAction::Move(Move::Right), 1);
        assert_eq!(*game.board().piece(), start.shifted(1, 0));

        let expected = game.board().rotate(game.board().piece(), crate::types::RotationDir::Right);
        game.handle_key(KeyAction::Move(Move::RotateRight), 1);
        assert_eq!(*game.board().piece(), expected);
    }

    #[test]
    fn test_invalid_move_leaves_piece() {
        let mut game = running_game(PieceKind::O);
        for _ in 0..10 {
            game.handle_key(KeyAction::Move(Move::Left), 1);
        }
        // O spans two columns; the wall stops it at x = 0.
        assert_eq!(game.board().piece().x, 0);
        let before = *game.board().piece();
        game.handle_key(KeyAction::Move(Move::Left), 1);
        assert_eq!(*game.board().piece(), before);
        assert_eq!(game.account().score(), 0);
    }

    #[test]
    fn test_soft_drop_scores_only_accepted_moves() {
        let mut game = running_game(PieceKind::O);
        for _ in 0..25 {
            game.handle_key(KeyAction::Move(Move::Down), 1);
        }
        // 18 rows fit below the spawn row for a 2-high piece.
        assert_eq!(game.board().piece().y, 18);
        assert_eq!(game.account().score(), 18);
        assert_eq!(game.hud().text(hud::SCORE), Some("18"));
    }

    #[test]
    fn test_hard_drop_lands_on_lowest_valid_row() {
        let mut game = running_game(PieceKind::O);
        game.board_mut().set(4, 15, 1);

        game.handle_key(KeyAction::Move(Move::HardDrop), 1);

        // Resting on the block at row 15.
        assert_eq!(game.board().piece().y, 13);
        assert!(game.board().piece().hard_dropped);
        assert_eq!(game.account().score(), 13 * HARD_DROP_POINTS);

        // Nothing locks before the drop interval runs out.
        game.on_frame(2);
        assert_eq!(game.board().get(4, 14), None);
        assert_eq!(game.board().piece().y, 13);

        game.on_frame(801);
        assert_eq!(game.board().get(4, 14), Some(PieceKind::O.id()));
        assert_eq!(game.board().piece().y, 0);
        assert!(!game.board().piece().hard_dropped);
    }

    #[test]
    fn test_hard_drop_when_resting_scores_nothing() {
        let mut game = running_game(PieceKind::O);
        let resting = game.board().piece().shifted(0, 18);
        game.board_mut().set_piece(resting);

        game.handle_key(KeyAction::Move(Move::HardDrop), 1);

        assert_eq!(game.account().score(), 0);
        assert_eq!(game.board().piece().y, 18);
        assert!(game.board().piece().hard_dropped);

        // Further moves wait for the lock.
        game.handle_key(KeyAction::Move(Move::Left), 1);
        assert_eq!(game.board().piece().x, resting.x);
    }

    #[test]
    fn test_gravity_waits_for_interval() {
        let mut game = running_game(PieceKind::T);

        game.on_frame(800);
        assert_eq!(game.board().piece().y, 0);
        assert_eq!(game.scheduler().pending_count(), 1);

        game.on_frame(801);
        assert_eq!(game.board().piece().y, 1);
        assert_eq!(game.time().start, 801);
    }

    #[test]
    fn test_no_frames_fire_while_paused() {
        let mut game = running_game(PieceKind::T);
        game.pause(1);
        game.on_frame(5_000);
        assert_eq!(game.board().piece().y, 0);
        assert_eq!(game.state(), LoopState::Paused);
    }

    #[test]
    fn test_overflow_ends_the_game() {
        let mut game = running_game(PieceKind::O);
        game.handle_key(KeyAction::Move(Move::Down), 1);
        game.board_mut().set(0, 19, 3);
        game.board_mut().set(4, 2, 1);
        let resting = Piece::new(PieceKind::O);
        game.board_mut().set_piece(resting);

        game.on_frame(900);

        assert_eq!(game.state(), LoopState::Stopped);
        assert_eq!(game.scheduler().pending_count(), 0);
        assert_eq!(game.request_id(), None);
        assert_eq!(*game.account(), Account::new());
        assert_eq!(game.hud().text(hud::SCORE), Some("0"));
        assert_eq!(game.board().filled_count(), 0);
        assert_eq!(game.hud().display(hud::PLAY_BTN), Display::Initial);
        assert_eq!(game.hud().display(hud::PAUSE_BTN), Display::None);
        assert_eq!(
            game.ctx().texts.last(),
            Some(&("GAME OVER".to_string(), Rgb::RED))
        );
    }

    #[test]
    fn test_escape_then_play_starts_fresh() {
        let mut game = running_game(PieceKind::T);
        game.handle_key(KeyAction::Move(Move::Down), 10);
        assert!(game.handle_key(KeyAction::Escape, 20));
        assert_eq!(game.state(), LoopState::Stopped);

        // Pause and moves need an active session.
        assert!(!game.handle_key(KeyAction::Pause, 30));
        assert!(!game.handle_key(KeyAction::Move(Move::Left), 30));
        assert_eq!(game.state(), LoopState::Stopped);

        assert!(game.handle_key(KeyAction::Play, 5_000));
        assert_eq!(game.state(), LoopState::Running);
        assert_eq!(game.time().start, 5_000);
        assert_eq!(game.account().score(), 0);
    }

    #[test]
    fn test_moves_apply_while_paused() {
        let mut game = running_game(PieceKind::T);
        game.pause(1);
        let before = *game.board().piece();

        assert!(game.handle_key(KeyAction::Move(Move::Left), 2));
        assert_eq!(*game.board().piece(), before.shifted(-1, 0));

        assert!(game.handle_key(KeyAction::Move(Move::Down), 3));
        assert_eq!(*game.board().piece(), before.shifted(-1, 1));
        assert_eq!(game.account().score(), SOFT_DROP_POINTS);
        assert_eq!(game.hud().text(hud::SCORE), Some("1"));

        // Still paused: no frame was scheduled by the moves.
        assert_eq!(game.state(), LoopState::Paused);
        assert_eq!(game.scheduler().pending_count(), 0);
    }

    #[test]
    fn test_escape_after_game_over_redraws_overlay() {
        let mut game = running_game(PieceKind::T);
        assert!(game.handle_key(KeyAction::Escape, 10));
        let texts = game.ctx().texts.len();
        game.board_mut().set(0, 19, 3);

        assert!(game.handle_key(KeyAction::Escape, 20));

        assert_eq!(game.state(), LoopState::Stopped);
        assert_eq!(game.scheduler().pending_count(), 0);
        assert_eq!(game.ctx().texts.len(), texts + 1);
        assert_eq!(
            game.ctx().texts.last(),
            Some(&("GAME OVER".to_string(), Rgb::RED))
        );
        assert_eq!(game.board().filled_count(), 0);
        assert_eq!(game.hud().display(hud::PLAY_BTN), Display::Initial);
    }

    #[test]
    fn test_escape_before_first_game_is_ignored() {
        let mut game = Game::new(Recorder::default(), 1);
        assert!(!game.handle_key(KeyAction::Escape, 0));
        assert!(game.ctx().texts.is_empty());
        assert_eq!(game.state(), LoopState::Stopped);
    }

    #[test]
    fn test_line_clear_scores_and_levels_up() {
        let mut game = running_game(PieceKind::I);
        game.account.set(Field::Lines, 9, &mut game.hud);
        for x in 0..10 {
            if !(3..7).contains(&x) {
                game.board_mut().set(x, 19, 2);
            }
        }

        game.handle_key(KeyAction::Move(Move::HardDrop), 1);
        game.on_frame(801);

        assert_eq!(game.account().score(), 18 * HARD_DROP_POINTS + 100);
        assert_eq!(game.account().level(), 1);
        assert_eq!(game.account().lines(), 0);
        assert_eq!(game.time().level, 720);
        assert_eq!(game.hud().text(hud::LEVEL), Some("1"));
        assert_eq!(game.board().filled_count(), 0);
    }

    #[test]
    fn test_missing_hud_element_is_tolerated() {
        let hud = Hud::new().without(hud::SCORE);
        let mut game = Game::with_hud(Recorder::default(), 1, hud);
        game.play(0);
        game.board_mut().set_piece(Piece::new(PieceKind::T));
        game.handle_key(KeyAction::Move(Move::Down), 1);

        assert_eq!(game.account().score(), 1);
        assert_eq!(game.hud().text(hud::SCORE), None);
    }
}
