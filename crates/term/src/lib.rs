//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. The board is
//! painted through the [`Surface`](crate::core::Surface) trait onto a
//! [`Canvas`], composed with the HUD by [`GameView`] into a framebuffer, and
//! flushed to the terminal by [`TerminalRenderer`].
//!
//! Board cells are 2 columns wide to compensate for the usual glyph aspect
//! ratio.

pub mod canvas;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockdrop_core as core;
pub use blockdrop_types as types;

pub use canvas::Canvas;
pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{AnchorY, GameView, Scene, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
