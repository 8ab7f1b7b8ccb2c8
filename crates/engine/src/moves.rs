//! Piece transforms for each [`Move`].

use crate::core::{Board, Piece};
use crate::types::Move;

/// Candidate state of `piece` after `mv`.
///
/// Pure: the board's current piece is not modified. Down and hard drop produce
/// the same one-row step; the hard drop loop lives in the session.
pub fn apply(mv: Move, piece: &Piece, board: &Board) -> Piece {
    if let Some(dir) = mv.rotation() {
        return board.rotate(piece, dir);
    }
    match mv {
        Move::Left => piece.shifted(-1, 0),
        Move::Right => piece.shifted(1, 0),
        _ => piece.shifted(0, 1),
    }
}
