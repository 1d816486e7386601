//! Shape catalog & SRS kick tables.
//!
//! Every `(shape, rotation)` template and every kick table entry below is a
//! compile-time constant, computed once and looked up at O(1) by the rest
//! of the engine — there is no runtime rotation math on the hot path.
//!
//! Coordinates are `(x, y)` with the origin at the bottom-left of the
//! template's own tight bounding box (never padded with empty rows or
//! columns), matching the playfield's bottom-left-origin, y-grows-up
//! convention.

use tui_tetris_types::{Rotation, ShapeName};

/// Four cell offsets making up one tetromino at one rotation.
pub type ShapeBlocks = [(i32, i32); 4];

/// Cell offsets for `(shape, rotation)`.
pub fn shape_blocks(name: ShapeName, rotation: Rotation) -> ShapeBlocks {
    let table = match name {
        ShapeName::L => &L_SHAPES,
        ShapeName::J => &J_SHAPES,
        ShapeName::S => &S_SHAPES,
        ShapeName::Z => &Z_SHAPES,
        ShapeName::O => &O_SHAPES,
        ShapeName::I => &I_SHAPES,
        ShapeName::T => &T_SHAPES,
    };
    table[rotation.index() as usize]
}

type ShapeTable = [ShapeBlocks; 4];

const L_SHAPES: ShapeTable = [
    [(0, 0), (1, 0), (2, 0), (2, 1)],
    [(0, 2), (0, 1), (0, 0), (1, 0)],
    [(0, 1), (1, 1), (2, 1), (0, 0)],
    [(0, 2), (1, 2), (1, 1), (1, 0)],
];

const J_SHAPES: ShapeTable = [
    [(0, 1), (0, 0), (1, 0), (2, 0)],
    [(0, 2), (1, 2), (0, 1), (0, 0)],
    [(0, 1), (1, 1), (2, 1), (2, 0)],
    [(1, 2), (1, 1), (0, 0), (1, 0)],
];

const S_SHAPES: ShapeTable = [
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    [(0, 1), (0, 2), (1, 0), (1, 1)],
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    [(0, 1), (0, 2), (1, 0), (1, 1)],
];

const Z_SHAPES: ShapeTable = [
    [(0, 1), (1, 1), (1, 0), (2, 0)],
    [(0, 0), (0, 1), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (1, 0), (2, 0)],
    [(0, 0), (0, 1), (1, 1), (1, 2)],
];

const T_SHAPES: ShapeTable = [
    [(0, 0), (1, 0), (2, 0), (1, 1)],
    [(0, 0), (0, 1), (0, 2), (1, 1)],
    [(0, 1), (1, 0), (1, 1), (2, 1)],
    [(0, 1), (1, 0), (1, 1), (1, 2)],
];

const I_SHAPES: ShapeTable = [
    [(0, 0), (1, 0), (2, 0), (3, 0)],
    [(0, 0), (0, 1), (0, 2), (0, 3)],
    [(0, 0), (1, 0), (2, 0), (3, 0)],
    [(0, 0), (0, 1), (0, 2), (0, 3)],
];

const O_SHAPES: ShapeTable = [
    [(0, 0), (1, 0), (0, 1), (1, 1)],
    [(0, 0), (1, 0), (0, 1), (1, 1)],
    [(0, 0), (1, 0), (0, 1), (1, 1)],
    [(0, 0), (1, 0), (0, 1), (1, 1)],
];

/// Five candidate `(dx, dy)` translations to try, in order, for a single
/// quarter-turn rotation between two adjacent rotation states.
pub type KickOffsets = [(i32, i32); 5];

/// The eight non-reflexive orthogonal-step `(from, to)` pairs and the kick
/// list to use for each. `O` has none of these matter (all offsets are
/// `(0, 0)`) since every `O` rotation is the identity placement.
///
/// Panics if `from == to` or `|from - to| == 2`: 180-degree rotation is not
/// part of standard SRS and has its own fallback strategy (see
/// `Tetrion::rotate_180`).
pub fn kick_offsets(name: ShapeName, from: Rotation, to: Rotation) -> KickOffsets {
    let f = from.index();
    let t = to.index();
    assert_ne!(f, t, "kick_offsets called with from == to");
    let step = (t as i32 - f as i32).rem_euclid(4);
    assert_ne!(step, 2, "180-degree rotation has no SRS kick table entry");

    if matches!(name, ShapeName::O) {
        return [(0, 0); 5];
    }
    let table: &[KickOffsets; 8] = if matches!(name, ShapeName::I) {
        &I_KICKS
    } else {
        &JLSTZ_KICKS
    };
    table[kick_index(f, t)]
}

/// Index into an 8-entry kick table for the `(from, to)` pair.
fn kick_index(from: u8, to: u8) -> usize {
    match (from, to) {
        (0, 1) => 0,
        (1, 0) => 1,
        (1, 2) => 2,
        (2, 1) => 3,
        (2, 3) => 4,
        (3, 2) => 5,
        (3, 0) => 6,
        (0, 3) => 7,
        _ => unreachable!("not an adjacent rotation pair: {from} -> {to}"),
    }
}

const JLSTZ_KICKS: [KickOffsets; 8] = [
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)], // 0->1
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],     // 1->0
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],     // 1->2
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)], // 2->1
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],    // 2->3
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],  // 3->2
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],  // 3->0
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],    // 0->3
];

const I_KICKS: [KickOffsets; 8] = [
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],  // 0->1
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],  // 1->0
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],  // 1->2
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],  // 2->1
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],  // 2->3
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],  // 3->2
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],  // 3->0
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],  // 0->3
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_shape_rotation_has_four_cells() {
        for &name in &ShapeName::ALL {
            for r in [Rotation::R0, Rotation::R1, Rotation::R2, Rotation::R3] {
                assert_eq!(shape_blocks(name, r).len(), 4);
            }
        }
    }

    #[test]
    fn every_template_is_tight_and_non_negative() {
        for &name in &ShapeName::ALL {
            for r in [Rotation::R0, Rotation::R1, Rotation::R2, Rotation::R3] {
                let blocks = shape_blocks(name, r);
                let min_x = blocks.iter().map(|&(x, _)| x).min().unwrap();
                let min_y = blocks.iter().map(|&(_, y)| y).min().unwrap();
                assert_eq!(min_x, 0, "{name:?} rot {r:?} not x-tight");
                assert_eq!(min_y, 0, "{name:?} rot {r:?} not y-tight");
            }
        }
    }

    #[test]
    fn l_spawn_matches_example_template() {
        // 10x20 empty field centering: leftmost = floor((10-3)/2) = 3.
        let blocks = shape_blocks(ShapeName::L, Rotation::R0);
        assert_eq!(blocks, [(0, 0), (1, 0), (2, 0), (2, 1)]);
    }

    #[test]
    fn i_spawn_is_four_wide_one_tall() {
        let blocks = shape_blocks(ShapeName::I, Rotation::R0);
        let min_x = blocks.iter().map(|&(x, _)| x).min().unwrap();
        let max_x = blocks.iter().map(|&(x, _)| x).max().unwrap();
        assert_eq!(max_x - min_x + 1, 4);
    }

    #[test]
    fn l_kick_table_matches_known_offsets() {
        let kicks = kick_offsets(ShapeName::L, Rotation::R3, Rotation::R0);
        assert_eq!(
            kicks,
            [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)]
        );
    }

    #[test]
    fn o_kicks_are_always_identity() {
        for (from, to) in [
            (Rotation::R0, Rotation::R1),
            (Rotation::R1, Rotation::R0),
            (Rotation::R2, Rotation::R3),
        ] {
            assert_eq!(kick_offsets(ShapeName::O, from, to), [(0, 0); 5]);
        }
    }

    #[test]
    #[should_panic]
    fn kick_offsets_rejects_180() {
        let _ = kick_offsets(ShapeName::T, Rotation::R0, Rotation::R2);
    }

    #[test]
    fn four_cw_rotations_return_to_original_cell_set() {
        use std::collections::BTreeSet;
        for &name in &ShapeName::ALL {
            let base: BTreeSet<_> = shape_blocks(name, Rotation::R0).into_iter().collect();
            let mut r = Rotation::R0;
            for _ in 0..4 {
                r = r.cw();
            }
            let looped: BTreeSet<_> = shape_blocks(name, r).into_iter().collect();
            assert_eq!(base, looped, "{name:?} did not return after four cw turns");
        }
    }
}
