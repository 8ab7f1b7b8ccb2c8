//! Pieces module - tetromino shape matrices and matrix rotation
//!
//! Shapes are square matrices (2x2, 3x3 or 4x4) whose non-zero entries are the
//! piece's cell id. Rotation transposes the matrix and then mirrors it, so a
//! piece turns inside its own bounding box (no wall kicks).

use crate::types::{PieceKind, RotationDir};

/// Largest matrix side (the I piece)
pub const MAX_SHAPE: usize = 4;

/// Square shape matrix, only the top-left `size` x `size` part is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    cells: [[u8; MAX_SHAPE]; MAX_SHAPE],
}

impl Shape {
    /// Build a shape from matrix rows. Rows must be square and at most 4 wide.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let size = rows.len().min(MAX_SHAPE);
        let mut cells = [[0u8; MAX_SHAPE]; MAX_SHAPE];
        for (y, row) in rows.iter().take(size).enumerate() {
            for (x, &v) in row.iter().take(size).enumerate() {
                cells[y][x] = v;
            }
        }
        Self {
            size: size as u8,
            cells,
        }
    }

    /// Spawn shape for a piece kind
    pub fn of(kind: PieceKind) -> Self {
        let id = kind.id();
        match kind {
            PieceKind::I => Self::from_rows(&[
                &[0, 0, 0, 0],
                &[id, id, id, id],
                &[0, 0, 0, 0],
                &[0, 0, 0, 0],
            ]),
            PieceKind::J => Self::from_rows(&[&[id, 0, 0], &[id, id, id], &[0, 0, 0]]),
            PieceKind::L => Self::from_rows(&[&[0, 0, id], &[id, id, id], &[0, 0, 0]]),
            PieceKind::O => Self::from_rows(&[&[id, id], &[id, id]]),
            PieceKind::S => Self::from_rows(&[&[0, id, id], &[id, id, 0], &[0, 0, 0]]),
            PieceKind::T => Self::from_rows(&[&[0, id, 0], &[id, id, id], &[0, 0, 0]]),
            PieceKind::Z => Self::from_rows(&[&[id, id, 0], &[0, id, id], &[0, 0, 0]]),
        }
    }

    /// Cell value at (x, y) inside the matrix; 0 outside of it.
    pub fn get(&self, x: usize, y: usize) -> u8 {
        if x >= self.size as usize || y >= self.size as usize {
            return 0;
        }
        self.cells[y][x]
    }

    /// Offsets of the filled cells, row-major.
    pub fn filled(&self) -> impl Iterator<Item = (i8, i8, u8)> + '_ {
        let n = self.size as usize;
        (0..n).flat_map(move |y| {
            (0..n).filter_map(move |x| {
                let v = self.cells[y][x];
                (v != 0).then_some((x as i8, y as i8, v))
            })
        })
    }

    /// Rotated copy: transpose, then reverse each row (right) or the row order (left).
    pub fn rotated(&self, dir: RotationDir) -> Self {
        let n = self.size as usize;
        let mut out = *self;
        for y in 0..n {
            for x in 0..n {
                out.cells[x][y] = self.cells[y][x];
            }
        }
        match dir {
            RotationDir::Right => {
                for row in out.cells.iter_mut().take(n) {
                    row[..n].reverse();
                }
            }
            RotationDir::Left => out.cells[..n].reverse(),
        }
        out
    }
}

/// Falling piece: shape plus position of the matrix's top-left corner.
///
/// `Piece` is `Copy`, so a candidate produced by a transform is an independent
/// snapshot and never aliases the board's current piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
    /// Set by a hard drop; the piece locks on the next board drop.
    pub hard_dropped: bool,
}

impl Piece {
    /// New piece at its spawn position
    pub fn new(kind: PieceKind) -> Self {
        let x = if kind == PieceKind::O { 4 } else { 3 };
        Self {
            kind,
            shape: Shape::of(kind),
            x,
            y: 0,
            hard_dropped: false,
        }
    }

    /// Copy moved by (dx, dy)
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Absolute board coordinates and cell id of every filled cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8, u8)> + '_ {
        self.shape
            .filled()
            .map(move |(dx, dy, v)| (self.x + dx, self.y + dy, v))
    }
}
