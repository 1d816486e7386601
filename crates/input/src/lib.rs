//! Terminal input module (engine-facing).
//!
//! Intentionally independent of any UI framework. Maps `crossterm` key
//! events into `tui-tetris-engine`'s `DriverEvent` vocabulary and handles
//! the press/release synthesis that raw terminals need (see [`handler`]).
//! DAS/ARR, gravity, and lock delay are not this crate's job — they live in
//! the timed driver, which only ever sees `Pressed`/`Released`/`Tick`.

pub mod handler;
pub mod map;

pub use tui_tetris_types as types;

pub use handler::InputHandler;
pub use map::{map_key_code, should_quit, Action, Mapped};
