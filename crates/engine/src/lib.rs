//! Game engine - session, account and frame loop
//!
//! Builds a playable session on top of the pure board rules in
//! [`blockdrop_core`]:
//!
//! - [`account`]: score/level/lines counters, mirrored into the HUD on every write
//! - [`moves`]: candidate piece for each input move
//! - [`scheduler`]: request/cancel animation frames on a fixed-tick host loop
//! - [`timing`]: gravity timer
//! - [`game`]: the session; key handling, play/pause/game over and animation
//!
//! # Example
//!
//! ```
//! use blockdrop_engine::core::Surface;
//! use blockdrop_engine::types::{Font, KeyAction, Move, Rgb};
//! use blockdrop_engine::{Game, LoopState};
//!
//! struct Null;
//!
//! impl Surface for Null {
//!     fn width(&self) -> u16 { 10 }
//!     fn height(&self) -> u16 { 20 }
//!     fn clear_rect(&mut self, _: u16, _: u16, _: u16, _: u16) {}
//!     fn fill_rect(&mut self, _: u16, _: u16, _: u16, _: u16) {}
//!     fn set_fill_style(&mut self, _: Rgb) {}
//!     fn set_font(&mut self, _: Font) {}
//!     fn fill_text(&mut self, _: &str, _: u16, _: u16) {}
//! }
//!
//! let mut game = Game::new(Null, 7);
//! game.handle_key(KeyAction::Play, 0);
//! game.handle_key(KeyAction::Move(Move::Down), 5);
//! assert_eq!(game.account().score(), 1);
//!
//! game.on_frame(16);
//! assert_eq!(game.state(), LoopState::Running);
//! ```

pub mod account;
pub mod game;
pub mod moves;
pub mod scheduler;
pub mod timing;

pub use blockdrop_core as core;
pub use blockdrop_types as types;

pub use account::{Account, Field};
pub use game::{Game, LoopState};
pub use scheduler::{FrameHandle, FrameScheduler};
pub use timing::Timing;
