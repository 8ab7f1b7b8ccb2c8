//! Board module - grid, falling piece and collision rules
//!
//! The board is a 10x20 grid where each cell is 0 (empty) or a piece id (1..=7).
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)
//!
//! The board owns the falling piece and the preview of the next one. Piece
//! transforms are computed elsewhere as candidates; the board only answers
//! whether a candidate is [`valid`](Board::valid) and commits it on
//! [`move_piece`](Board::move_piece).

use arrayvec::ArrayVec;

use crate::piece::Piece;
use crate::rng::SimpleRng;
use crate::surface::Surface;
use crate::types::{PieceKind, RotationDir, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);
const BOARD_ROWS: usize = BOARD_HEIGHT as usize;

#[derive(Debug, Clone)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [u8; BOARD_SIZE],
    piece: Piece,
    next: Piece,
    rng: SimpleRng,
    /// Lines cleared by the last freeze, until taken by the session.
    line_clear: Option<u32>,
}

impl Board {
    /// Create an empty board with a falling piece and a preview drawn from `seed`
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let piece = Piece::new(rng.next_kind());
        let next = Piece::new(rng.next_kind());
        Self {
            cells: [0; BOARD_SIZE],
            piece,
            next,
            rng,
            line_clear: None,
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<u8> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, value: u8) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Inside the walls, above the floor and not occupied
    pub fn is_empty(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(0))
    }

    /// The falling piece
    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    /// The piece that spawns after the current one locks
    pub fn next(&self) -> &Piece {
        &self.next
    }

    /// Replace the falling piece.
    pub fn set_piece(&mut self, piece: Piece) {
        self.piece = piece;
    }

    /// Whether every filled cell of `candidate` lands on an empty in-bounds cell
    pub fn valid(&self, candidate: &Piece) -> bool {
        candidate.cells().all(|(x, y, _)| self.is_empty(x, y))
    }

    /// Rotated candidate of `piece`; the board is not touched.
    pub fn rotate(&self, piece: &Piece, dir: RotationDir) -> Piece {
        Piece {
            shape: piece.shape.rotated(dir),
            ..*piece
        }
    }

    /// Commit a candidate's position and shape to the falling piece.
    ///
    /// Ignored after a hard drop: the piece stays where it landed until it locks.
    pub fn move_piece(&mut self, candidate: Piece) {
        if self.piece.hard_dropped {
            return;
        }
        self.piece.x = candidate.x;
        self.piece.y = candidate.y;
        self.piece.shape = candidate.shape;
    }

    /// Lock the falling piece in place; it freezes on the next [`drop`](Board::drop).
    pub fn hard_drop(&mut self) {
        self.piece.hard_dropped = true;
    }

    /// Advance the falling piece one row.
    ///
    /// When it cannot move (or was hard-dropped) it freezes into the grid, full
    /// lines are cleared and the next piece spawns. Returns `false` when the frozen
    /// piece never left the top row: the board is full and the game is over.
    pub fn drop(&mut self) -> bool {
        let candidate = self.piece.shifted(0, 1);
        if !self.piece.hard_dropped && self.valid(&candidate) {
            self.piece.y = candidate.y;
            return true;
        }

        self.freeze();
        let cleared = self.clear_full_rows();
        if !cleared.is_empty() {
            self.line_clear = Some(cleared.len() as u32);
        }

        if self.piece.y == 0 {
            return false;
        }

        self.piece = self.next;
        self.next = Piece::new(self.rng.next_kind());
        true
    }

    /// Take the number of lines cleared by the last freeze.
    pub fn take_line_clear(&mut self) -> Option<u32> {
        self.line_clear.take()
    }

    fn freeze(&mut self) {
        let piece = self.piece;
        for (x, y, v) in piece.cells() {
            self.set(x, y, v);
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|&cell| cell != 0)
    }

    /// Clear all full rows and return the row indices that were cleared (sorted bottom to top)
    /// Uses a two-pointer algorithm with zero-allocation
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, BOARD_ROWS> {
        let mut cleared_rows = ArrayVec::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Clear the remaining rows at the top
        self.cells[..write_y * width].fill(0);

        cleared_rows
    }

    /// Paint locked cells and the falling piece.
    pub fn draw<S: Surface>(&self, ctx: &mut S) {
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                if let Some(kind) = self.get(x, y).and_then(PieceKind::from_id) {
                    ctx.set_fill_style(kind.color());
                    ctx.fill_rect(x as u16, y as u16, 1, 1);
                }
            }
        }

        ctx.set_fill_style(self.piece.kind.color());
        for (x, y, _) in self.piece.cells() {
            if Self::index(x, y).is_some() {
                ctx.fill_rect(x as u16, y as u16, 1, 1);
            }
        }
    }

    /// Empty grid with fresh current and next pieces
    pub fn reset(&mut self) {
        self.cells = [0; BOARD_SIZE];
        self.piece = Piece::new(self.rng.next_kind());
        self.next = Piece::new(self.rng.next_kind());
        self.line_clear = None;
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Number of filled cells in the grid (the falling piece excluded)
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(kind: PieceKind) -> Board {
        let mut board = Board::new(3);
        board.set_piece(Piece::new(kind));
        board
    }

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_valid_rejects_walls_floor_and_occupied() {
        let mut board = board_with(PieceKind::O);
        let p = *board.piece();
        assert!(board.valid(&p));

        // O occupies columns x..x+1; x=8 is the last valid column.
        assert!(board.valid(&Piece { x: 8, ..p }));
        assert!(!board.valid(&Piece { x: 9, ..p }));
        assert!(!board.valid(&Piece { x: -1, ..p }));
        assert!(board.valid(&Piece { y: 18, ..p }));
        assert!(!board.valid(&Piece { y: 19, ..p }));
        assert!(!board.valid(&Piece { y: -1, ..p }));

        board.set(5, 10, 1);
        assert!(!board.valid(&Piece { x: 4, y: 9, ..p }));
        assert!(board.valid(&Piece { x: 6, y: 9, ..p }));
    }

    #[test]
    fn test_empty_matrix_cells_may_leave_the_board() {
        // The I piece's matrix has an empty top row, so y = -1 is still inside.
        let board = board_with(PieceKind::I);
        let p = *board.piece();
        assert!(board.valid(&Piece { y: -1, ..p }));
        assert!(!board.valid(&Piece { y: -2, ..p }));
    }

    #[test]
    fn test_rotate_does_not_touch_the_piece() {
        let board = board_with(PieceKind::T);
        let before = *board.piece();
        let rotated = board.rotate(&before, RotationDir::Right);
        assert_ne!(rotated.shape, before.shape);
        assert_eq!(*board.piece(), before);
        assert_eq!((rotated.x, rotated.y), (before.x, before.y));
    }

    #[test]
    fn test_drop_moves_then_freezes_and_spawns_next() {
        let mut board = board_with(PieceKind::O);
        let next_kind = board.next().kind;

        for _ in 0..18 {
            assert!(board.drop());
        }
        assert_eq!(board.piece().y, 18);
        assert_eq!(board.filled_count(), 0);

        // Blocked by the floor: freeze and spawn.
        assert!(board.drop());
        assert_eq!(board.filled_count(), 4);
        assert_eq!(board.get(4, 19), Some(PieceKind::O.id()));
        assert_eq!(board.piece().kind, next_kind);
        assert_eq!(board.piece().y, 0);
    }

    #[test]
    fn test_drop_on_top_row_reports_overflow() {
        let mut board = board_with(PieceKind::O);
        // Block directly under the spawn position.
        board.set(4, 2, 1);
        assert!(!board.drop());
    }

    #[test]
    fn test_hard_dropped_piece_freezes_on_next_drop() {
        let mut board = board_with(PieceKind::O);
        board.move_piece(board.piece().shifted(0, 5));
        board.hard_drop();

        // Further commits are ignored.
        board.move_piece(board.piece().shifted(1, 0));
        assert_eq!((board.piece().x, board.piece().y), (4, 5));

        assert!(board.drop());
        assert_eq!(board.get(4, 5), Some(PieceKind::O.id()));
        assert!(!board.piece().hard_dropped);
    }

    #[test]
    fn test_clear_full_rows_shifts_down() {
        let mut board = Board::new(1);
        for x in 0..10 {
            board.set(x, 19, 2);
            board.set(x, 17, 3);
        }
        board.set(0, 18, 5);
        board.set(4, 16, 6);

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[19, 17]);
        assert_eq!(board.get(0, 19), Some(5));
        assert_eq!(board.get(4, 18), Some(6));
        assert_eq!(board.filled_count(), 2);
    }

    #[test]
    fn test_clear_counts_every_full_row() {
        let mut board = board_with(PieceKind::O);
        for y in 14..20 {
            for x in 0..10 {
                board.set(x, y, 2);
            }
        }
        board.move_piece(board.piece().shifted(0, 5));
        board.hard_drop();

        assert!(board.drop());
        assert_eq!(board.take_line_clear(), Some(6));
        // The frozen O fell by the six cleared rows.
        assert_eq!(board.get(4, 11), Some(PieceKind::O.id()));
        assert_eq!(board.get(5, 12), Some(PieceKind::O.id()));
        assert_eq!(board.filled_count(), 4);

        for y in 0..BOARD_ROWS {
            for x in 0..10 {
                board.set(x, y as i8, 1);
            }
        }
        assert_eq!(board.clear_full_rows().len(), BOARD_ROWS);
        assert_eq!(board.filled_count(), 0);
    }

    #[test]
    fn test_freeze_records_line_clear() {
        let mut board = board_with(PieceKind::I);
        for x in 0..10 {
            if !(3..7).contains(&x) {
                board.set(x, 19, 1);
            }
        }
        // I's filled row is matrix row 1, so y = 18 puts it on row 19.
        board.move_piece(board.piece().shifted(0, 18));
        assert!(board.drop());
        assert_eq!(board.take_line_clear(), Some(1));
        assert_eq!(board.take_line_clear(), None);
        assert_eq!(board.filled_count(), 0);
    }

    #[test]
    fn test_reset_empties_grid() {
        let mut board = Board::new(9);
        board.set(1, 1, 4);
        board.hard_drop();
        board.reset();
        assert_eq!(board.filled_count(), 0);
        assert!(!board.piece().hard_dropped);
        assert_eq!(board.piece().y, 0);
    }
}
