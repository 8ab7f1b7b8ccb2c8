//! GameView: composes the board canvas and the HUD into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::canvas::Canvas;
use crate::core::hud::{self, Hud};
use crate::core::Piece;
use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::types::Rgb;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Everything one frame shows
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub canvas: &'a Canvas,
    pub hud: &'a Hud,
    /// Preview of the next piece, if the session exposes one
    pub next: Option<&'a Piece>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Panel labels and the HUD element each one shows
const COUNTERS: [(&str, &str); 3] = [
    ("SCORE", hud::SCORE),
    ("LEVEL", hud::LEVEL),
    ("LINES", hud::LINES),
];

/// Minimum side panel width; narrower terminals show only the board.
const PANEL_MIN_W: u16 = 12;

#[derive(Debug, Clone)]
pub struct GameView {
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render a scene into an existing framebuffer.
    ///
    /// Callers can reuse the framebuffer across frames; it is only reallocated
    /// when the viewport size changes.
    pub fn render_into(&self, scene: &Scene<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let board = scene.canvas.framebuffer();
        let frame_w = board.width() + 2;
        let frame_h = board.height() + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::default().with_fg(Rgb::new(200, 200, 200));
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);
        fb.blit(board, start_x + 1, start_y + 1);

        self.draw_side_panel(fb, scene, viewport, start_x + frame_w + 2, start_y);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, scene: &Scene<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(scene, viewport, &mut fb);
        fb
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        scene: &Scene<'_>,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_W {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::default().with_fg(Rgb::new(200, 200, 200));
        let hint = value.dim();

        let mut y = start_y;
        for (name, id) in COUNTERS {
            // Counters missing from the HUD are not shown.
            let Some(text) = scene.hud.text(id) else {
                continue;
            };
            fb.put_str(panel_x, y, name, label);
            fb.put_str(panel_x, y + 1, text, value);
            y += 3;
        }

        if let Some(next) = scene.next {
            fb.put_str(panel_x, y, "NEXT", label);
            fb.put_str(panel_x + 5, y, next.kind.letter(), label);
            y += 1;
            let style = CellStyle::default()
                .with_fg(next.kind.color())
                .bold();
            let mut bottom = 0;
            for (x, sy, _) in next.shape.filled() {
                let px = panel_x + (x as u16) * 2;
                fb.fill_rect(px, y + sy as u16, 2, 1, '█', style);
                bottom = bottom.max(sy as u16 + 1);
            }
            y += bottom + 1;
        }

        if scene.hud.is_visible(hud::PLAY_BTN) {
            let end = fb.put_str(panel_x, y, "[ Play ]", label);
            fb.put_str(end + 1, y, "Enter", hint);
            y += 1;
        }
        if scene.hud.is_visible(hud::PAUSE_BTN) {
            let end = fb.put_str(panel_x, y, "[ Pause ]", label);
            fb.put_str(end + 1, y, "P", hint);
            y += 1;
        }

        y += 1;
        for line in ["←→↓ move  ↑/Q rotate", "Space drop  Esc end"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y += 1;
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}
