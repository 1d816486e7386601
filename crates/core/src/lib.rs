//! Core Tetris rules engine.
//!
//! This crate is the timeless, synchronous rule machine: shape geometry and
//! SRS kicks (`shapes`), the 7-bag randomizer (`rng`), grid storage and line
//! clearing (`playfield`), and the `Tetrion` state machine that ties them
//! together. Nothing here owns a clock — gravity, DAS/ARR, and lock-delay
//! timers live one layer up, in the driver crate.

pub mod playfield;
pub mod rng;
pub mod shapes;
pub mod tetrion;

pub use playfield::{GarbageHolePolicy, Playfield};
pub use rng::Bag;
pub use shapes::{kick_offsets, shape_blocks, KickOffsets, ShapeBlocks};
pub use tetrion::{Piece, Tetrion, TetrionConfig};
