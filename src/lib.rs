//! TUI Tetris (workspace facade crate).
//!
//! A guideline-compliant Tetris engine split into small crates under
//! `crates/`: the discrete rules machine (`core`), the timed driver
//! (`engine`), shared types (`types`), and the terminal-facing I/O layers
//! (`term`, `input`) the CLI binary wires together. This crate re-exports
//! them under one namespace so `tui_tetris::{core,engine,term,input,types}`
//! is a stable single entry point for the binary and for tests.

pub use tui_tetris_core as core;
pub use tui_tetris_engine as engine;
pub use tui_tetris_input as input;
pub use tui_tetris_term as term;
pub use tui_tetris_types as types;
