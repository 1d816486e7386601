//! Key mapping: crossterm key codes to the engine's input vocabulary.
//!
//! Two families of key fall out of the driver's event vocabulary:
//! *directional* keys (`Left`/`Right`/`Down`) that the driver tracks
//! press/release state for, and *instantaneous* actions (rotate, hard drop,
//! hold) that fire once per keystroke. This module only does the mapping;
//! DAS/ARR, gravity, and lock delay all live in `tui-tetris-engine`.

use crossterm::event::KeyCode;

use tui_tetris_types::Key;

/// One instantaneous (non-tracked) action a keystroke can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    RotateCw,
    RotateCcw,
    Rotate180,
    HardDrop,
    Hold,
}

/// What a key code means to the engine, before press/release tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mapped {
    Directional(Key),
    Action(Action),
}

/// Maps a raw key code to what the engine cares about. Returns `None` for
/// keys the engine doesn't consume (host-level concerns like quit/pause/
/// restart are not part of the engine's event vocabulary and are handled by
/// the CLI binary directly).
pub fn map_key_code(code: KeyCode) -> Option<Mapped> {
    use Mapped::*;
    match code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(Directional(Key::Left)),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(Directional(Key::Right)),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(Directional(Key::Down)),
        KeyCode::Up | KeyCode::Char('x') | KeyCode::Char('X') => Some(Action(Action::RotateCw)),
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(Action(Action::RotateCcw)),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(Action(Action::Rotate180)),
        KeyCode::Char(' ') => Some(Action(Action::HardDrop)),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(Action(Action::Hold)),
        _ => None,
    }
}

/// Keys the CLI binary handles itself rather than forwarding to the engine.
pub fn should_quit(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
}
