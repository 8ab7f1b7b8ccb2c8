//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the playfield rules and the display model. It has
//! **zero dependencies** on terminals or I/O:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Testable**: boards can be set up cell by cell
//! - **Portable**: drawing goes through the [`Surface`] trait
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid, falling piece, collision, line clearing
//! - [`piece`]: tetromino shape matrices and matrix rotation
//! - [`rng`]: seeded piece generation
//! - [`scoring`]: line clear points, level progression, drop intervals
//! - [`surface`]: the drawing surface contract
//! - [`hud`]: named display elements (score/level/lines, Play/Pause controls)
//!
//! # Example
//!
//! ```
//! use blockdrop_core::Board;
//!
//! let mut board = Board::new(12345);
//! let candidate = board.piece().shifted(1, 0);
//! if board.valid(&candidate) {
//!     board.move_piece(candidate);
//! }
//!
//! // Gravity: one row per call, `false` once the board is full.
//! assert!(board.drop());
//! ```

pub mod board;
pub mod hud;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod surface;

pub use blockdrop_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use hud::{Display, Element, Hud};
pub use piece::{Piece, Shape};
pub use rng::SimpleRng;
pub use scoring::{advance_lines, drop_interval_ms, line_clear_points, LevelProgress};
pub use surface::Surface;
