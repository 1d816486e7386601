//! Press/release tracking for terminals that don't emit key-release events.
//!
//! Most terminals deliver only `Press`/`Repeat` key events over a raw TTY;
//! an actual key-up is rarely observable. `InputHandler` turns the presence
//! of repeated presses into a held key by refreshing a per-key "last seen"
//! timestamp, and synthesizes a `*Released` driver event once a key hasn't
//! been seen for `release_timeout_ms`. The driver (`tui-tetris-engine`)
//! still owns all DAS/ARR/gravity timing; this only decides when a key
//! counts as pressed versus released.

use arrayvec::ArrayVec;
use crossterm::event::KeyCode;

use tui_tetris_types::{DriverEvent, Key};

use crate::map::{map_key_code, Action, Mapped};

/// How long a directional key may go unseen before we consider it released.
/// Comfortably above typical terminal key-repeat intervals (usually
/// 30-60ms) so a held key doesn't flicker released between repeats.
pub const DEFAULT_RELEASE_TIMEOUT_MS: u64 = 120;

#[derive(Debug, Clone, Copy, Default)]
struct Tracked {
    pressed: bool,
    last_seen_ms: u64,
}

/// Tracks directional key state and turns raw key codes into the driver's
/// timestamped event vocabulary.
#[derive(Debug, Clone)]
pub struct InputHandler {
    left: Tracked,
    right: Tracked,
    down: Tracked,
    release_timeout_ms: u64,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_release_timeout_ms(DEFAULT_RELEASE_TIMEOUT_MS)
    }

    pub fn with_release_timeout_ms(release_timeout_ms: u64) -> Self {
        Self {
            left: Tracked::default(),
            right: Tracked::default(),
            down: Tracked::default(),
            release_timeout_ms,
        }
    }

    fn tracked_mut(&mut self, key: Key) -> &mut Tracked {
        match key {
            Key::Left => &mut self.left,
            Key::Right => &mut self.right,
            Key::Down => &mut self.down,
        }
    }

    fn driver_key(key: Key) -> (fn(u64) -> DriverEvent, fn(u64) -> DriverEvent) {
        match key {
            Key::Left => (DriverEvent::LeftPressed, DriverEvent::LeftReleased),
            Key::Right => (DriverEvent::RightPressed, DriverEvent::RightReleased),
            Key::Down => (DriverEvent::SoftDropPressed, DriverEvent::SoftDropReleased),
        }
    }

    /// Feeds one raw key code observed at time `ms`. Returns zero, one, or
    /// two driver events (an action key yields exactly one; a directional
    /// key yields a `*Pressed` only on the press-to-held transition, or
    /// none at all on a refreshing repeat).
    pub fn on_key(&mut self, code: KeyCode, ms: u64) -> ArrayVec<DriverEvent, 2> {
        let mut out = ArrayVec::new();
        match map_key_code(code) {
            Some(Mapped::Directional(key)) => {
                let (pressed_event, _) = Self::driver_key(key);
                let tracked = self.tracked_mut(key);
                let was_pressed = tracked.pressed;
                tracked.pressed = true;
                tracked.last_seen_ms = ms;
                if !was_pressed {
                    out.push(pressed_event(ms));
                }
            }
            Some(Mapped::Action(action)) => {
                out.push(match action {
                    Action::RotateCw => DriverEvent::RotateCw(ms),
                    Action::RotateCcw => DriverEvent::RotateCcw(ms),
                    Action::Rotate180 => DriverEvent::Rotate180(ms),
                    Action::HardDrop => DriverEvent::HardDrop(ms),
                    Action::Hold => DriverEvent::Hold(ms),
                });
            }
            None => {}
        }
        out
    }

    /// Call once per poll cycle (alongside feeding `Tick` events) to
    /// synthesize releases for directional keys that have gone quiet.
    pub fn poll_releases(&mut self, ms: u64) -> ArrayVec<DriverEvent, 3> {
        let mut out = ArrayVec::new();
        for key in [Key::Left, Key::Right, Key::Down] {
            let (_, released_event) = Self::driver_key(key);
            let tracked = self.tracked_mut(key);
            if tracked.pressed && ms.saturating_sub(tracked.last_seen_ms) > self.release_timeout_ms {
                tracked.pressed = false;
                let _ = out.try_push(released_event(ms));
            }
        }
        out
    }
}
