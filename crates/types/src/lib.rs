//! Shared data types for the Tetris engine.
//!
//! This crate defines the pure, dependency-free vocabulary used by every
//! other crate in the workspace: tetromino names and rotations, tiles and
//! blocks, the rule-denial error taxonomy, the driver's input event
//! vocabulary, and a handful of tunable timing constants. Nothing in here
//! touches I/O, randomness, or time.

mod color;
mod error;
mod event;
mod rotation;
mod shape_name;
mod tile;

pub use color::{shape_color, Rgb, GARBAGE_COLOR};
pub use error::TetrionError;
pub use event::{DriverEvent, Key};
pub use rotation::Rotation;
pub use shape_name::ShapeName;
pub use tile::{Tile, TileVariant};

/// A single occupied or to-be-placed cell: a grid position plus the tile
/// that sits (or would sit) there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    pub x: i32,
    pub y: i32,
    pub tile: Tile,
}

impl Block {
    pub fn new(x: i32, y: i32, tile: Tile) -> Self {
        Self { x, y, tile }
    }
}

/// Default playfield dimensions (guideline standard).
pub const DEFAULT_COLS: usize = 10;
pub const DEFAULT_ROWS: usize = 20;

/// Number of upcoming shapes shown in the preview queue by default.
pub const DEFAULT_PREVIEW_SIZE: usize = 5;

/// Timed-driver defaults (see the driver's tick semantics).
pub const MS_PER_GRAVITY_DROP: u64 = 1000;
pub const MS_PER_SOFT_DROP_STEP: u64 = 20;
pub const MS_PER_AUTOSHIFT: u64 = 25;
pub const AUTOSHIFT_DELAY_MS: u64 = 133;
pub const LOCK_DELAY_MS: u64 = 500;

/// Length of the driver's tick-timestamp ring used for `fps_estimate()`.
pub const TICK_HISTORY_LEN: usize = 8;
