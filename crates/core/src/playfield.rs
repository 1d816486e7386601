//! Playfield — grid storage, placement checks, line clearing, garbage.
//!
//! Coordinates: the origin is the bottom-left cell, `x` grows right, `y`
//! grows up. `grid[y][x]` is `None` for an empty cell. Row 0 is the lowest
//! row of the *visible* field; rows `>= rows` are the vanish zone where
//! pieces spawn and where lock-out is evaluated.

use tui_tetris_types::{Block, Tile, TileVariant};

/// Where `add_garbage` puts the single empty hole in each garbage row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GarbageHolePolicy {
    /// A hole in a random column, chosen independently per row (the
    /// guideline-correct default).
    RandomPerRow,
    /// The same fixed column in every row.
    FixedColumn(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playfield {
    cols: usize,
    rows: usize,
    total_rows: usize,
    /// `grid[y][x]`, `y` counted from the bottom of the field.
    grid: Vec<Vec<Option<Tile>>>,
}

impl Playfield {
    /// An empty playfield with the standard vanish-zone sizing:
    /// `total_rows = rows + max(rows, 20)`.
    pub fn empty(cols: usize, rows: usize) -> Self {
        let vanish = rows.max(20);
        let total_rows = rows + vanish;
        Self {
            cols,
            rows,
            total_rows,
            grid: vec![vec![None; cols]; total_rows],
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    fn in_range(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.cols && y >= 0 && (y as usize) < self.total_rows
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Tile> {
        if !self.in_range(x, y) {
            return None;
        }
        self.grid[y as usize][x as usize]
    }

    /// True iff every non-ghost block is in range and its cell is empty.
    /// Ghost blocks are never consulted.
    pub fn can_place(&self, blocks: &[Block]) -> bool {
        blocks.iter().all(|b| {
            if b.tile.is_ghost() {
                return true;
            }
            self.in_range(b.x, b.y) && self.grid[b.y as usize][b.x as usize].is_none()
        })
    }

    /// All-or-nothing: fails without mutating if any block would not fit.
    pub fn add_blocks(&mut self, blocks: &[Block]) -> Result<(), ()> {
        if !self.can_place(blocks) {
            return Err(());
        }
        for b in blocks {
            if !b.tile.is_ghost() {
                self.grid[b.y as usize][b.x as usize] = Some(b.tile);
            }
        }
        Ok(())
    }

    pub fn add_block(&mut self, block: Block) -> Result<(), ()> {
        self.add_blocks(&[block])
    }

    /// Adds every block that fits and silently skips the rest. Used only
    /// to overlay the ghost piece onto a rendered snapshot.
    pub fn add_blocks_best_effort(&mut self, blocks: &[Block]) {
        for &b in blocks {
            if b.tile.is_ghost() {
                if self.in_range(b.x, b.y) && self.grid[b.y as usize][b.x as usize].is_none() {
                    self.grid[b.y as usize][b.x as usize] = Some(b.tile);
                }
            } else if self.can_place(&[b]) {
                self.grid[b.y as usize][b.x as usize] = Some(b.tile);
            }
        }
    }

    fn row_full(&self, y: usize) -> bool {
        self.grid[y].iter().all(|c| c.is_some())
    }

    /// Removes every full row, preserves the relative order of survivors,
    /// and prepends empty rows on top to restore `total_rows`. Returns the
    /// number of rows removed.
    pub fn clear_lines(&mut self) -> usize {
        let before = self.grid.len();
        self.grid.retain(|row| !row.iter().all(|c| c.is_some()));
        let cleared = before - self.grid.len();
        for _ in 0..cleared {
            self.grid.push(vec![None; self.cols]);
        }
        cleared
    }

    /// Prepends `n` garbage rows at the bottom, each full except for one
    /// hole, and drops the topmost `n` rows to keep `total_rows` constant.
    pub fn add_garbage(&mut self, n: usize, policy: GarbageHolePolicy, rng: &mut impl FnMut(usize) -> usize) {
        for _ in 0..n {
            let hole = match policy {
                GarbageHolePolicy::RandomPerRow => rng(self.cols),
                GarbageHolePolicy::FixedColumn(col) => col.min(self.cols.saturating_sub(1)),
            };
            let mut row = vec![Some(Tile::Garbage); self.cols];
            if self.cols > 0 {
                row[hole] = None;
            }
            self.grid.insert(0, row);
        }
        self.grid.truncate(self.total_rows);
        while self.grid.len() < self.total_rows {
            self.grid.push(vec![None; self.cols]);
        }
    }

    pub fn blocks(&self) -> Vec<Block> {
        let mut out = Vec::new();
        for (y, row) in self.grid.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if let Some(tile) = cell {
                    out.push(Block::new(x as i32, y as i32, *tile));
                }
            }
        }
        out
    }

    pub fn block_matrix(&self) -> &[Vec<Option<Tile>>] {
        &self.grid
    }

    /// Renders the field as a list of row strings, visual order (highest
    /// `y` first), using the text format from the external test contract:
    /// `.` empty, a shape letter a Normal tile, `G` Garbage.
    pub fn to_rows(&self) -> Vec<String> {
        self.grid
            .iter()
            .rev()
            .map(|row| {
                row.iter()
                    .map(|c| match c {
                        None => '.',
                        Some(tile) => tile.code().unwrap_or('.'),
                    })
                    .collect()
            })
            .collect()
    }

    /// Builds a playfield directly from visual-order row strings (highest
    /// `y` first). `rows == total_rows` for a field built this way — there
    /// is no implied vanish zone beyond what the caller writes out.
    pub fn from_rows(rows: &[&str]) -> Self {
        use tui_tetris_types::ShapeName;
        let cols = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        let total_rows = rows.len();
        let mut grid = vec![vec![None; cols]; total_rows];
        for (visual_row, line) in rows.iter().enumerate() {
            let y = total_rows - 1 - visual_row;
            for (x, ch) in line.chars().enumerate() {
                grid[y][x] = match ch {
                    '.' => None,
                    'G' => Some(Tile::Garbage),
                    c => ShapeName::from_char(c).map(|s| Tile::Shape(s, TileVariant::Normal)),
                };
            }
        }
        Self {
            cols,
            rows: total_rows,
            total_rows,
            grid,
        }
    }

}
