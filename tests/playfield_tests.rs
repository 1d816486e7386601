//! Cross-crate checks against the public `tui_tetris::core` facade: grid
//! invariants, the text playfield format, and garbage injection.

use tui_tetris::core::{GarbageHolePolicy, Playfield};
use tui_tetris::types::{Block, ShapeName, Tile, TileVariant};

#[test]
fn empty_field_satisfies_total_rows_invariant() {
    let pf = Playfield::empty(10, 20);
    assert_eq!(pf.total_rows(), 40);
    assert!(pf.block_matrix().iter().all(|row| row.len() == pf.cols()));
}

#[test]
fn clearing_full_rows_preserves_total_rows_and_survivor_order() {
    let mut pf = Playfield::from_rows(&[".S", "..", "II", "J.", "LL"]);
    let cleared = pf.clear_lines();
    assert_eq!(cleared, 2);
    assert_eq!(pf.to_rows(), vec!["..", "..", ".S", "..", "J."]);
}

#[test]
fn garbage_rows_always_carry_exactly_one_hole() {
    let mut pf = Playfield::empty(10, 5);
    let mut draws = vec![3usize, 7, 0];
    pf.add_garbage(3, GarbageHolePolicy::RandomPerRow, &mut |_max| draws.remove(0));
    let bottom_three = &pf.block_matrix()[0..3];
    for row in bottom_three {
        let holes = row.iter().filter(|c| c.is_none()).count();
        assert_eq!(holes, 1);
    }
}

#[test]
fn can_place_and_add_block_agree() {
    let mut pf = Playfield::empty(4, 4);
    let block = Block::new(2, 2, Tile::Shape(ShapeName::T, TileVariant::Normal));
    assert!(pf.can_place(&[block]));
    assert!(pf.add_block(block).is_ok());
    assert!(!pf.can_place(&[block]));
    assert!(pf.add_block(block).is_err());
}
