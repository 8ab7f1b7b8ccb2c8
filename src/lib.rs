//! blockdrop (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so the binary, the
//! integration tests and the benchmarks share a single import path, and holds
//! the runner's settings and log setup.

pub mod config;
pub mod logging;

pub use blockdrop_core as core;
pub use blockdrop_engine as engine;
pub use blockdrop_input as input;
pub use blockdrop_term as term;
pub use blockdrop_types as types;
