use crate::ShapeName;

/// An 8-bit-per-channel RGB color, as consumed by renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// The shape color contract: a fixed RGB per shape, plus garbage.
pub fn shape_color(name: ShapeName) -> Rgb {
    match name {
        ShapeName::L => Rgb(255, 128, 0),
        ShapeName::J => Rgb(0, 132, 255),
        ShapeName::S => Rgb(0, 217, 51),
        ShapeName::Z => Rgb(245, 7, 7),
        ShapeName::T => Rgb(205, 7, 245),
        ShapeName::I => Rgb(0, 247, 255),
        ShapeName::O => Rgb(242, 235, 12),
    }
}

/// Garbage doesn't belong to a shape, so it isn't part of `shape_color`;
/// renderers that need a color for it use this constant directly.
pub const GARBAGE_COLOR: Rgb = Rgb(156, 154, 154);
