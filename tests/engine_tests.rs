//! Cross-crate checks against the public `tui_tetris::engine` facade:
//! the DAS/ARR worked example and deterministic replay.

use tui_tetris::core::TetrionConfig;
use tui_tetris::engine::{DriverConfig, Tetris};
use tui_tetris::types::{DriverEvent, DEFAULT_PREVIEW_SIZE};

fn spawned_driver(cols: usize, rows: usize, seed: u64) -> Tetris {
    // `Tetris::new` spawns the first piece itself.
    Tetris::new(
        0,
        DriverConfig::default(),
        TetrionConfig {
            cols,
            rows,
            seed,
            preview_size: DEFAULT_PREVIEW_SIZE,
            ..TetrionConfig::default()
        },
    )
}

#[test]
fn das_arr_worked_example_yields_eleven_moves() {
    let mut d = spawned_driver(40, 20, 1234);
    let start_x = spawned_piece_x(&d);
    d.handle_event(DriverEvent::LeftPressed(0));
    for ms in [100u64, 150, 200, 300, 400] {
        d.handle_event(DriverEvent::Tick(ms));
    }
    let end_x = spawned_piece_x(&d);
    assert_eq!(start_x - end_x, 11);
}

fn spawned_piece_x(d: &Tetris) -> i32 {
    d.playfield(false)
        .blocks()
        .iter()
        .map(|b| b.x)
        .min()
        .unwrap()
}

#[test]
fn deterministic_replay_holds_across_two_independent_drivers() {
    let events = [
        DriverEvent::RightPressed(0),
        DriverEvent::Tick(50),
        DriverEvent::RotateCcw(60),
        DriverEvent::Tick(500),
        DriverEvent::HardDrop(510),
        DriverEvent::Tick(1500),
        DriverEvent::Hold(1510),
    ];
    let mut a = spawned_driver(10, 20, 42);
    let mut b = spawned_driver(10, 20, 42);
    for &ev in &events {
        a.handle_event(ev);
        b.handle_event(ev);
    }
    assert_eq!(a.playfield(true).to_rows(), b.playfield(true).to_rows());
    assert_eq!(a.queue(), b.queue());
    assert_eq!(a.hold(), b.hold());
    assert_eq!(a.cleared(), b.cleared());
    assert_eq!(a.is_game_over(), b.is_game_over());
}

#[test]
fn game_over_halts_further_mutation() {
    // A 4x2 field with no vanish headroom beyond the minimum forces a
    // block-out almost immediately once the stack fills the floor.
    let mut d = spawned_driver(4, 2, 9);
    for _ in 0..40 {
        d.handle_event(DriverEvent::HardDrop(0));
        if d.is_game_over() {
            break;
        }
    }
    assert!(d.is_game_over());
    let snapshot_before = d.playfield(false).to_rows();
    d.handle_event(DriverEvent::LeftPressed(99_999));
    d.handle_event(DriverEvent::Tick(100_000));
    assert_eq!(d.playfield(false).to_rows(), snapshot_before);
}
