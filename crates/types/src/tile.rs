use crate::ShapeName;

/// Rendering hint on a shape tile. Ghost tiles never occupy the lock stack
/// and never participate in collision; they exist only so a renderer can
/// overlay the hard-drop projection on a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileVariant {
    Normal,
    Ghost,
}

/// A tagged grid cell value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Garbage,
    Shape(ShapeName, TileVariant),
}

impl Tile {
    pub fn is_ghost(&self) -> bool {
        matches!(self, Tile::Shape(_, TileVariant::Ghost))
    }

    /// The single-letter text-format code for this tile (`G`, or the
    /// shape's letter for a Normal tile). Ghost tiles have no code; they
    /// are never stored in a `Playfield` grid.
    pub fn code(&self) -> Option<char> {
        match self {
            Tile::Garbage => Some('G'),
            Tile::Shape(name, TileVariant::Normal) => name.as_str().chars().next(),
            Tile::Shape(_, TileVariant::Ghost) => None,
        }
    }
}
