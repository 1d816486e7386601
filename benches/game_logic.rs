use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tui_tetris::core::{Playfield, Tetrion, TetrionConfig};
use tui_tetris::engine::{DriverConfig, Tetris};
use tui_tetris::term::{encode_diff_into, FrameBuffer, GameView, Viewport};
use tui_tetris::types::{DriverEvent, ShapeName, Tile, TileVariant};

fn fresh_tetrion(seed: u64) -> Tetrion {
    Tetrion::new(TetrionConfig {
        seed,
        ..TetrionConfig::default()
    })
    .spawn()
    .unwrap()
}

fn bench_move_left(c: &mut Criterion) {
    let t = fresh_tetrion(1);
    c.bench_function("tetrion_move_left", |b| {
        b.iter(|| black_box(t.left()))
    });
}

fn bench_rotate_with_kicks(c: &mut Criterion) {
    let t = fresh_tetrion(2);
    c.bench_function("tetrion_rotate_cw", |b| {
        b.iter(|| black_box(t.rotate(true)))
    });
}

fn bench_hard_drop_and_lock(c: &mut Criterion) {
    let t = fresh_tetrion(3);
    c.bench_function("tetrion_hard_drop_and_lock", |b| {
        b.iter(|| {
            let dropped = t.hard_drop();
            black_box(dropped.lock())
        })
    });
}

fn bench_clear_four_lines(c: &mut Criterion) {
    c.bench_function("playfield_clear_4_lines", |b| {
        b.iter(|| {
            let mut pf = Playfield::empty(10, 20);
            for y in 0..4i32 {
                for x in 0..10i32 {
                    let tile = Tile::Shape(ShapeName::I, TileVariant::Normal);
                    let _ = pf.add_block(tui_tetris::types::Block::new(x, y, tile));
                }
            }
            black_box(pf.clear_lines())
        })
    });
}

fn bench_driver_tick(c: &mut Criterion) {
    let mut driver = Tetris::new(0, DriverConfig::default(), TetrionConfig::default());
    driver.handle_event(DriverEvent::HardDrop(0));
    let mut ms = 0u64;
    c.bench_function("driver_tick_16ms", |b| {
        b.iter(|| {
            ms += 16;
            driver.handle_event(DriverEvent::Tick(black_box(ms)));
        })
    });
}

fn bench_render_into(c: &mut Criterion) {
    let driver = Tetris::new(0, DriverConfig::default(), TetrionConfig::default());
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    c.bench_function("render_into", |b| {
        b.iter(|| {
            view.render_into(
                black_box(&driver.playfield(true)),
                &driver.queue(),
                driver.hold(),
                viewport,
                &mut fb,
            );
        })
    });
}

fn bench_encode_diff_into(c: &mut Criterion) {
    let mut driver = Tetris::new(0, DriverConfig::default(), TetrionConfig::default());
    driver.handle_event(DriverEvent::HardDrop(0));
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);

    let mut prev = FrameBuffer::new(viewport.width, viewport.height);
    view.render_into(&driver.playfield(true), &driver.queue(), driver.hold(), viewport, &mut prev);

    driver.handle_event(DriverEvent::Tick(1000));
    let mut next = FrameBuffer::new(viewport.width, viewport.height);
    view.render_into(&driver.playfield(true), &driver.queue(), driver.hold(), viewport, &mut next);

    let mut out: Vec<u8> = Vec::with_capacity(64 * 1024);
    c.bench_function("encode_diff_into", |b| {
        b.iter(|| {
            out.clear();
            encode_diff_into(&prev, &next, &mut out).unwrap();
            black_box(out.len())
        })
    });
}

criterion_group!(
    benches,
    bench_move_left,
    bench_rotate_with_kicks,
    bench_hard_drop_and_lock,
    bench_clear_four_lines,
    bench_driver_tick,
    bench_render_into,
    bench_encode_diff_into
);
criterion_main!(benches);
