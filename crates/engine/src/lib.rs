//! Timed Tetris driver.
//!
//! Wraps a [`Tetrion`] with the time axis: gravity, soft drop, DAS/ARR
//! auto-shift, and lock delay. Every public method takes a monotonic
//! millisecond timestamp supplied by the host (key capture, main loop) —
//! this crate never reads a clock itself, which is what makes replay
//! ("same seed, same event stream, same result") a property of the driver
//! rather than something a caller has to arrange.

use tui_tetris_core::{Playfield, Tetrion, TetrionConfig};
use tui_tetris_types::{
    DriverEvent, Key, Rotation, ShapeName, TetrionError, AUTOSHIFT_DELAY_MS, LOCK_DELAY_MS,
    MS_PER_AUTOSHIFT, MS_PER_GRAVITY_DROP, MS_PER_SOFT_DROP_STEP, TICK_HISTORY_LEN,
};

/// Tunable timing knobs for a driver instance. Defaults match the
/// engine's recommended DAS/ARR/gravity/lock-delay timing.
#[derive(Debug, Clone, Copy)]
pub struct DriverConfig {
    pub ms_per_gravity_drop: u64,
    pub ms_per_soft_drop_step: u64,
    pub ms_per_autoshift: u64,
    pub autoshift_delay_ms: u64,
    pub lock_delay_ms: u64,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            ms_per_gravity_drop: MS_PER_GRAVITY_DROP,
            ms_per_soft_drop_step: MS_PER_SOFT_DROP_STEP,
            ms_per_autoshift: MS_PER_AUTOSHIFT,
            autoshift_delay_ms: AUTOSHIFT_DELAY_MS,
            lock_delay_ms: LOCK_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct KeyState {
    pressed: bool,
    last_change_ms: u64,
}

/// The terminal condition: once raised, the driver stops mutating its
/// Tetrion. Snapshots keep reflecting the last valid state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOver {
    pub cause: TetrionError,
}

#[derive(Debug, Clone)]
pub struct Tetris {
    tetrion: Tetrion,
    config: DriverConfig,
    left: KeyState,
    right: KeyState,
    down: KeyState,
    t_drop_ms: u64,
    t_autoshift_ms: u64,
    t_lock_ms: u64,
    ticks: [u64; TICK_HISTORY_LEN],
    tick_count: usize,
    game_over: Option<GameOver>,
}

impl Tetris {
    /// Builds a driver around a freshly constructed, empty `Tetrion` and
    /// immediately spawns its first piece. There is no explicit "spawn"
    /// event for hosts to send — a piece must exist before the first
    /// gravity tick or key press makes sense — so construction performs
    /// the one spawn a brand new Tetrion always owes its queue head. A
    /// `BlockOut` here (only reachable with a pathological
    /// `initial_garbage_rows` configuration) is reported as an immediate
    /// game-over rather than a panic.
    pub fn new(start_ms: u64, config: DriverConfig, tetrion_config: TetrionConfig) -> Self {
        let tetrion = Tetrion::new(tetrion_config);
        let (tetrion, game_over) = match tetrion.spawn() {
            Ok(spawned) => (spawned, None),
            Err(e) => (tetrion, Some(GameOver { cause: e })),
        };
        Self {
            tetrion,
            config,
            left: KeyState::default(),
            right: KeyState::default(),
            down: KeyState::default(),
            t_drop_ms: start_ms,
            t_autoshift_ms: start_ms,
            t_lock_ms: start_ms,
            ticks: [start_ms; TICK_HISTORY_LEN],
            tick_count: 0,
            game_over,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over.is_some()
    }

    pub fn game_over(&self) -> Option<GameOver> {
        self.game_over
    }

    pub fn playfield(&self, include_ghost: bool) -> Playfield {
        self.tetrion.playfield(include_ghost)
    }

    pub fn queue(&self) -> Vec<ShapeName> {
        self.tetrion.queue()
    }

    pub fn hold(&self) -> Option<ShapeName> {
        self.tetrion.hold_piece()
    }

    pub fn cleared(&self) -> u64 {
        self.tetrion.cleared()
    }

    /// Average inter-tick interval over the recorded ring, in ticks per
    /// second. `0.0` until at least two real ticks have been observed.
    pub fn fps_estimate(&self) -> f64 {
        let n = self.tick_count.min(TICK_HISTORY_LEN);
        if n < 2 {
            return 0.0;
        }
        let newest = self.ticks[TICK_HISTORY_LEN - 1];
        let oldest_index = TICK_HISTORY_LEN - n;
        let oldest = self.ticks[oldest_index];
        let span_ms = newest.saturating_sub(oldest);
        if span_ms == 0 {
            return 0.0;
        }
        (n - 1) as f64 * 1000.0 / span_ms as f64
    }

    fn end_game(&mut self, cause: TetrionError) {
        if self.game_over.is_none() {
            self.game_over = Some(GameOver { cause });
        }
    }

    /// Clamps a possibly out-of-order tick timestamp to be non-decreasing
    /// against the last recorded tick.
    fn clamp_ms(&self, ms: u64) -> u64 {
        ms.max(self.ticks[TICK_HISTORY_LEN - 1])
    }

    /// Feed one input event to the driver.
    pub fn handle_event(&mut self, event: DriverEvent) {
        if self.game_over.is_some() {
            return;
        }
        match event {
            DriverEvent::LeftPressed(ms) => self.press(Key::Left, ms),
            DriverEvent::LeftReleased(ms) => self.release(Key::Left, ms),
            DriverEvent::RightPressed(ms) => self.press(Key::Right, ms),
            DriverEvent::RightReleased(ms) => self.release(Key::Right, ms),
            DriverEvent::SoftDropPressed(ms) => {
                self.down.pressed = true;
                self.down.last_change_ms = ms;
                self.t_drop_ms = ms.saturating_sub(self.config.ms_per_soft_drop_step);
            }
            DriverEvent::SoftDropReleased(ms) => {
                self.down.pressed = false;
                self.down.last_change_ms = ms;
            }
            DriverEvent::RotateCw(ms) => self.try_rotate(ms, |t| t.rotate(true)),
            DriverEvent::RotateCcw(ms) => self.try_rotate(ms, |t| t.rotate(false)),
            DriverEvent::Rotate180(ms) => self.try_rotate(ms, |t| t.rotate_180()),
            DriverEvent::HardDrop(ms) => self.hard_drop(ms),
            DriverEvent::Hold(ms) => self.do_hold(ms),
            DriverEvent::Tick(ms) => self.tick(ms),
        }
    }

    fn press(&mut self, key: Key, ms: u64) {
        let state = match key {
            Key::Left => &mut self.left,
            Key::Right => &mut self.right,
            Key::Down => &mut self.down,
        };
        state.pressed = true;
        state.last_change_ms = ms;

        let dx = match key {
            Key::Left => -1,
            Key::Right => 1,
            Key::Down => 0,
        };
        if dx == 0 {
            return;
        }
        if let Ok(next) = self.tetrion.move_by(dx, 0) {
            self.tetrion = next;
            self.t_lock_ms = ms;
        }
    }

    fn release(&mut self, key: Key, ms: u64) {
        let state = match key {
            Key::Left => &mut self.left,
            Key::Right => &mut self.right,
            Key::Down => &mut self.down,
        };
        state.pressed = false;
        state.last_change_ms = ms;
    }

    fn try_rotate(&mut self, ms: u64, op: impl FnOnce(&Tetrion) -> Result<Tetrion, TetrionError>) {
        if let Ok(next) = op(&self.tetrion) {
            self.tetrion = next;
            self.t_lock_ms = ms;
        }
    }

    fn hard_drop(&mut self, ms: u64) {
        self.tetrion = self.tetrion.hard_drop();
        self.t_drop_ms = ms;
        match self.tetrion.lock() {
            Ok(locked) => {
                self.tetrion = locked;
                self.t_lock_ms = ms;
                match self.tetrion.spawn() {
                    Ok(spawned) => {
                        self.tetrion = spawned;
                        self.t_drop_ms = ms;
                        self.t_lock_ms = ms;
                    }
                    Err(e) => self.end_game(e),
                }
            }
            Err(e) => self.end_game(e),
        }
    }

    fn do_hold(&mut self, ms: u64) {
        match self.tetrion.hold() {
            Ok(next) => {
                self.tetrion = next;
                self.t_drop_ms = ms;
                self.t_lock_ms = ms;
            }
            Err(TetrionError::CannotHold) => {}
            Err(e) => self.end_game(e),
        }
    }

    /// Advance the driver by one tick at absolute time `ms`.
    fn tick(&mut self, ms: u64) {
        let ms = self.clamp_ms(ms);
        self.ticks.rotate_left(1);
        let last = TICK_HISTORY_LEN - 1;
        self.ticks[last] = ms;
        self.tick_count = self.tick_count.saturating_add(1);

        self.apply_gravity(ms);
        if self.game_over.is_some() {
            return;
        }
        self.apply_autoshift(ms);
    }

    fn apply_gravity(&mut self, ms: u64) {
        let rate = if self.down.pressed {
            self.config.ms_per_soft_drop_step
        } else {
            self.config.ms_per_gravity_drop
        };
        if rate == 0 {
            return;
        }
        let elapsed = ms.saturating_sub(self.t_drop_ms);
        let n = elapsed / rate;
        self.t_drop_ms += n * rate;

        let mut grounded = false;
        for _ in 0..n {
            match self.tetrion.drop_one() {
                Ok(next) => {
                    self.tetrion = next;
                    self.t_lock_ms = ms;
                }
                Err(_) => {
                    grounded = true;
                    break;
                }
            }
        }
        if !grounded {
            // Still worth checking: a piece can already be resting after
            // the loop above exhausted its budget exactly at the floor.
            grounded = self.tetrion.drop_one().is_err();
        }
        if grounded {
            if ms.saturating_sub(self.t_lock_ms) > self.config.lock_delay_ms {
                match self.tetrion.lock() {
                    Ok(locked) => {
                        self.tetrion = locked;
                        self.t_drop_ms = ms;
                        self.t_lock_ms = ms;
                        match self.tetrion.spawn() {
                            Ok(spawned) => {
                                self.tetrion = spawned;
                                self.t_drop_ms = ms;
                                self.t_lock_ms = ms;
                            }
                            Err(e) => self.end_game(e),
                        }
                    }
                    Err(e) => self.end_game(e),
                }
            }
        }
    }

    fn apply_autoshift(&mut self, ms: u64) {
        let dir = match (self.left.pressed, self.right.pressed) {
            (true, true) => {
                if self.left.last_change_ms >= self.right.last_change_ms {
                    Some((-1i32, self.left.last_change_ms))
                } else {
                    Some((1i32, self.right.last_change_ms))
                }
            }
            (true, false) => Some((-1, self.left.last_change_ms)),
            (false, true) => Some((1, self.right.last_change_ms)),
            (false, false) => None,
        };
        let Some((dx, last_press_ms)) = dir else {
            return;
        };
        if ms.saturating_sub(last_press_ms) <= self.config.autoshift_delay_ms {
            return;
        }
        if self.config.ms_per_autoshift == 0 {
            return;
        }
        let base = self
            .t_autoshift_ms
            .max(last_press_ms + self.config.autoshift_delay_ms);
        let k = ms.saturating_sub(base) / self.config.ms_per_autoshift;
        self.t_autoshift_ms = base + k * self.config.ms_per_autoshift;

        for _ in 0..k {
            match self.tetrion.move_by(dx, 0) {
                Ok(next) => {
                    self.tetrion = next;
                    self.t_lock_ms = ms;
                }
                Err(_) => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_tetris_types::DEFAULT_PREVIEW_SIZE;

    fn driver(cols: usize, rows: usize, seed: u64) -> Tetris {
        // `Tetris::new` already spawns the first piece.
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
    fn fps_estimate_is_zero_before_two_ticks() {
        let d = driver(10, 20, 1);
        assert_eq!(d.fps_estimate(), 0.0);
    }

    #[test]
    fn directional_press_moves_immediately() {
        let mut d = driver(10, 20, 1);
        let before = d.playfield(false).blocks();
        d.handle_event(DriverEvent::LeftPressed(10));
        let after = d.playfield(false).blocks();
        assert_ne!(before, after);
    }

    #[test]
    fn hard_drop_locks_and_spawns_next() {
        let mut d = driver(10, 20, 2);
        let cleared_before = d.cleared();
        d.handle_event(DriverEvent::HardDrop(5));
        assert!(!d.is_game_over());
        assert_eq!(d.cleared(), cleared_before);
        assert!(d.tetrion.active().is_some());
    }

    #[test]
    fn das_arr_worked_example_yields_eleven_moves() {
        let mut d = driver(40, 20, 9);
        let start_x = d.tetrion.active().unwrap().x;
        d.handle_event(DriverEvent::LeftPressed(0));
        for ms in [100u64, 150, 200, 300, 400] {
            d.handle_event(DriverEvent::Tick(ms));
        }
        let end_x = d.tetrion.active().unwrap().x;
        assert_eq!(start_x - end_x, 11);
    }

    #[test]
    fn lock_delay_expires_and_locks_after_threshold() {
        let mut d = driver(3, 2, 11);
        d.tetrion = d
            .tetrion
            .spawn_shape(ShapeName::T, None, None, Some(Rotation::R2))
            .unwrap();
        d.tetrion = d.tetrion.hard_drop();
        d.t_lock_ms = 0;
        d.t_drop_ms = 0;
        let cleared_before = d.cleared();
        d.handle_event(DriverEvent::Tick(d.config.lock_delay_ms + 1));
        assert!(d.tetrion.cleared() >= cleared_before);
    }

    #[test]
    fn hold_cannot_hold_twice_is_a_no_op() {
        let mut d = driver(10, 20, 3);
        d.handle_event(DriverEvent::Hold(1));
        let after_first = d.hold();
        d.handle_event(DriverEvent::Hold(2));
        assert_eq!(d.hold(), after_first);
        assert!(!d.is_game_over());
    }

    #[test]
    fn deterministic_replay_across_identical_event_streams() {
        let events = [
            DriverEvent::LeftPressed(0),
            DriverEvent::Tick(50),
            DriverEvent::RotateCw(60),
            DriverEvent::Tick(300),
            DriverEvent::HardDrop(310),
            DriverEvent::Tick(400),
        ];
        let mut a = driver(10, 20, 77);
        let mut b = driver(10, 20, 77);
        for &e in &events {
            a.handle_event(e);
            b.handle_event(e);
        }
        assert_eq!(a.playfield(true).to_rows(), b.playfield(true).to_rows());
        assert_eq!(a.queue(), b.queue());
        assert_eq!(a.hold(), b.hold());
        assert_eq!(a.cleared(), b.cleared());
    }
}
