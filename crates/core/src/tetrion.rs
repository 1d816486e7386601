//! Tetrion — the discrete, timeless Tetris rule machine.
//!
//! Every operation either produces a fresh `Tetrion` or fails with a typed
//! `TetrionError`; nothing here mutates in place or throws. Internally each
//! operation clones `self` and mutates the clone, which keeps the external
//! API purely functional (the source pattern this crate is modeling — see
//! the workspace `DESIGN.md`) while the clone itself stays cheap: the
//! playfield is a handful of kilobytes at most.

use std::collections::VecDeque;

use tui_tetris_types::{Block, Rotation, ShapeName, Tile, TileVariant};
use tui_tetris_types::{DEFAULT_COLS, DEFAULT_PREVIEW_SIZE, DEFAULT_ROWS};
use tui_tetris_types::TetrionError;

use crate::playfield::{GarbageHolePolicy, Playfield};
use crate::rng::{Bag, SimpleRng};
use crate::shapes::{kick_offsets, shape_blocks};

/// The active, falling piece: a shape/rotation plus the position offset
/// applied to the shape's template cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub x: i32,
    pub y: i32,
    pub shape: ShapeName,
    pub rotation: Rotation,
}

impl Piece {
    pub fn blocks(&self) -> [Block; 4] {
        shape_blocks(self.shape, self.rotation).map(|(dx, dy)| {
            Block::new(
                self.x + dx,
                self.y + dy,
                Tile::Shape(self.shape, TileVariant::Normal),
            )
        })
    }
}

fn bounds(offsets: [(i32, i32); 4]) -> (i32, i32, i32, i32) {
    let min_x = offsets.iter().map(|&(x, _)| x).min().unwrap();
    let max_x = offsets.iter().map(|&(x, _)| x).max().unwrap();
    let min_y = offsets.iter().map(|&(_, y)| y).min().unwrap();
    let max_y = offsets.iter().map(|&(_, y)| y).max().unwrap();
    (min_x, max_x, min_y, max_y)
}

#[derive(Debug, Clone)]
pub struct TetrionConfig {
    pub cols: usize,
    pub rows: usize,
    pub preview_size: usize,
    pub seed: u64,
    pub initial_garbage_rows: usize,
    pub garbage_policy: GarbageHolePolicy,
}

impl Default for TetrionConfig {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
            preview_size: DEFAULT_PREVIEW_SIZE,
            seed: 0,
            initial_garbage_rows: 0,
            garbage_policy: GarbageHolePolicy::RandomPerRow,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Tetrion {
    piece: Option<Piece>,
    locked: Playfield,
    bag: Bag,
    queue: VecDeque<ShapeName>,
    hold: Option<ShapeName>,
    can_hold: bool,
    cleared: u64,
    garbage_policy: GarbageHolePolicy,
    garbage_rng: SimpleRng,
}

impl Tetrion {
    pub fn new(config: TetrionConfig) -> Self {
        let mut locked = Playfield::empty(config.cols, config.rows);
        let mut garbage_rng = SimpleRng::new(config.seed.wrapping_add(0x6761_7262_6167));
        if config.initial_garbage_rows > 0 {
            locked.add_garbage(config.initial_garbage_rows, config.garbage_policy, &mut |max| {
                garbage_rng.next_usize(max)
            });
        }
        let mut bag = Bag::new(config.seed);
        let queue = (0..config.preview_size).map(|_| bag.draw()).collect();
        Self {
            piece: None,
            locked,
            bag,
            queue,
            hold: None,
            can_hold: true,
            cleared: 0,
            garbage_policy: config.garbage_policy,
            garbage_rng,
        }
    }

    pub fn cols(&self) -> usize {
        self.locked.cols()
    }

    pub fn rows(&self) -> usize {
        self.locked.rows()
    }

    pub fn active(&self) -> Option<Piece> {
        self.piece
    }

    pub fn queue(&self) -> Vec<ShapeName> {
        self.queue.iter().copied().collect()
    }

    pub fn hold_piece(&self) -> Option<ShapeName> {
        self.hold
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn cleared(&self) -> u64 {
        self.cleared
    }

    /// Spawns `shape` at an explicit position/rotation, or the standard
    /// centered spawn position when omitted.
    pub fn spawn_shape(
        &self,
        shape: ShapeName,
        x: Option<i32>,
        y: Option<i32>,
        rotation: Option<Rotation>,
    ) -> Result<Tetrion, TetrionError> {
        let rotation = rotation.unwrap_or(Rotation::R0);
        let (min_x, max_x, min_y, _max_y) = bounds(shape_blocks(shape, rotation));
        let width = max_x - min_x + 1;
        let cols = self.cols() as i32;
        let rows = self.rows() as i32;

        let default_x = (cols - width) / 2 - min_x;
        let default_y = rows - min_y;
        let piece = Piece {
            x: x.unwrap_or(default_x),
            y: y.unwrap_or(default_y),
            shape,
            rotation,
        };

        if !self.locked.can_place(&piece.blocks()) {
            return Err(TetrionError::BlockOut);
        }
        let mut next = self.clone();
        next.piece = Some(piece);
        Ok(next)
    }

    /// Pops the queue head, refills it from the bag, spawns it, and resets
    /// the per-piece hold gate.
    pub fn spawn(&self) -> Result<Tetrion, TetrionError> {
        let mut staged = self.clone();
        let shape = staged
            .queue
            .pop_front()
            .expect("queue invariant: always preview_size shapes");
        staged.queue.push_back(staged.bag.draw());

        let mut spawned = staged.spawn_shape(shape, None, None, None)?;
        spawned.can_hold = true;
        Ok(spawned)
    }

    pub fn move_by(&self, dx: i32, dy: i32) -> Result<Tetrion, TetrionError> {
        let piece = self.piece.ok_or(TetrionError::CannotMove)?;
        let moved = Piece {
            x: piece.x + dx,
            y: piece.y + dy,
            ..piece
        };
        if !self.locked.can_place(&moved.blocks()) {
            return Err(TetrionError::CannotMove);
        }
        let mut next = self.clone();
        next.piece = Some(moved);
        Ok(next)
    }

    pub fn left(&self) -> Result<Tetrion, TetrionError> {
        self.move_by(-1, 0)
    }

    pub fn right(&self) -> Result<Tetrion, TetrionError> {
        self.move_by(1, 0)
    }

    /// Sugar for `move(0, -1)`; named `drop_one` to avoid colliding with
    /// `Drop::drop`.
    pub fn drop_one(&self) -> Result<Tetrion, TetrionError> {
        self.move_by(0, -1)
    }

    /// Repeatedly drops until grounded. Never fails: a piece that can't
    /// drop at all (or no active piece) simply returns unchanged.
    pub fn hard_drop(&self) -> Tetrion {
        let mut cur = self.clone();
        while let Ok(next) = cur.drop_one() {
            cur = next;
        }
        cur
    }

    /// Rotates one quarter turn (clockwise if `cw`, else counter-clockwise)
    /// via SRS kicks.
    pub fn rotate(&self, cw: bool) -> Result<Tetrion, TetrionError> {
        let piece = self.piece.ok_or(TetrionError::CannotRotate)?;
        let to = if cw {
            piece.rotation.cw()
        } else {
            piece.rotation.ccw()
        };
        self.try_rotation(piece, to)
    }

    /// 180-degree rotation: try the identity placement first, then two
    /// successive clockwise quarter-rotations (no standard SRS
    /// kick table applies at 180).
    pub fn rotate_180(&self) -> Result<Tetrion, TetrionError> {
        let piece = self.piece.ok_or(TetrionError::CannotRotate)?;
        let flipped = Piece {
            rotation: piece.rotation.opposite(),
            ..piece
        };
        if self.locked.can_place(&flipped.blocks()) {
            let mut next = self.clone();
            next.piece = Some(flipped);
            return Ok(next);
        }
        self.rotate(true).and_then(|mid| mid.rotate(true))
    }

    fn try_rotation(&self, piece: Piece, to: Rotation) -> Result<Tetrion, TetrionError> {
        for (dx, dy) in kick_offsets(piece.shape, piece.rotation, to) {
            let candidate = Piece {
                x: piece.x + dx,
                y: piece.y + dy,
                rotation: to,
                shape: piece.shape,
            };
            if self.locked.can_place(&candidate.blocks()) {
                let mut next = self.clone();
                next.piece = Some(candidate);
                return Ok(next);
            }
        }
        Err(TetrionError::CannotRotate)
    }

    /// Commits the active piece into the lock stack, clears full lines,
    /// and clears the active piece. Fails with `LockOut` if every cell of
    /// the piece is inside the vanish zone.
    pub fn lock(&self) -> Result<Tetrion, TetrionError> {
        let piece = self.piece.ok_or(TetrionError::LockOut)?;
        let blocks = piece.blocks();
        let min_y = blocks.iter().map(|b| b.y).min().unwrap();
        if min_y >= self.rows() as i32 {
            return Err(TetrionError::LockOut);
        }
        let mut next = self.clone();
        next.locked
            .add_blocks(&blocks)
            .expect("active piece must fit the lock stack by invariant");
        let cleared = next.locked.clear_lines();
        next.cleared += cleared as u64;
        next.piece = None;
        Ok(next)
    }

    /// Swap with the hold slot. Fails with `CannotHold` once hold
    /// has already been used for the current piece.
    pub fn hold(&self) -> Result<Tetrion, TetrionError> {
        if !self.can_hold {
            return Err(TetrionError::CannotHold);
        }
        let active = self.piece.ok_or(TetrionError::CannotHold)?;

        match self.hold {
            None => {
                let mut staged = self.clone();
                staged.hold = Some(active.shape);
                let mut spawned = staged.spawn()?;
                spawned.can_hold = false;
                Ok(spawned)
            }
            Some(held) => {
                let mut spawned = self.spawn_shape(held, None, None, None)?;
                spawned.hold = Some(active.shape);
                spawned.can_hold = false;
                Ok(spawned)
            }
        }
    }

    /// Prepends `n` garbage rows to the lock stack. Never fails;
    /// a piece that ends up buried is caught by the next `lock`/`spawn`.
    pub fn add_garbage(&self, n: usize) -> Tetrion {
        let mut next = self.clone();
        let policy = next.garbage_policy;
        next.locked
            .add_garbage(n, policy, &mut |max| next.garbage_rng.next_usize(max));
        next
    }

    /// A renderer-facing snapshot: the lock stack with the active piece
    /// overlaid, optionally including the hard-drop ghost projection.
    pub fn playfield(&self, include_ghost: bool) -> Playfield {
        let mut pf = self.locked.clone();
        if let Some(piece) = self.piece {
            pf.add_blocks(&piece.blocks())
                .expect("active piece must fit the lock stack by invariant");
            if include_ghost {
                if let Some(landed) = self.hard_drop().piece {
                    let ghost_blocks = shape_blocks(landed.shape, landed.rotation).map(|(dx, dy)| {
                        Block::new(
                            landed.x + dx,
                            landed.y + dy,
                            Tile::Shape(landed.shape, TileVariant::Ghost),
                        )
                    });
                    pf.add_blocks_best_effort(&ghost_blocks);
                }
            }
        }
        pf
    }
}
