/// One of the seven guideline tetrominoes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeName {
    L,
    J,
    S,
    Z,
    O,
    I,
    T,
}

impl ShapeName {
    /// All seven shapes, in a fixed order used to build fresh bags.
    pub const ALL: [ShapeName; 7] = [
        ShapeName::L,
        ShapeName::J,
        ShapeName::S,
        ShapeName::Z,
        ShapeName::O,
        ShapeName::I,
        ShapeName::T,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeName::L => "L",
            ShapeName::J => "J",
            ShapeName::S => "S",
            ShapeName::Z => "Z",
            ShapeName::O => "O",
            ShapeName::I => "I",
            ShapeName::T => "T",
        }
    }

    /// Parse a shape from its single-letter code, as used by the text
    /// playfield format (`L/J/S/Z/T/I/O`).
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'L' => Some(ShapeName::L),
            'J' => Some(ShapeName::J),
            'S' => Some(ShapeName::S),
            'Z' => Some(ShapeName::Z),
            'O' => Some(ShapeName::O),
            'I' => Some(ShapeName::I),
            'T' => Some(ShapeName::T),
            _ => None,
        }
    }
}
