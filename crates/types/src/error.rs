/// Typed rule denials produced by `Tetrion` operations.
///
/// These are ordinary, non-allocating result values, not exceptions: the
/// kick-candidate search and the driver's swallow-or-game-over policy both
/// treat them as plain data. Only `BlockOut` and `LockOut` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TetrionError {
    /// `add_block`/`add_blocks` targeted an occupied or out-of-range cell.
    /// Never surfaced past the `Tetrion` boundary.
    InvalidPlacement,
    /// A translation would overlap the lock stack or leave the field.
    CannotMove,
    /// Every SRS kick candidate (and, for 180s, both fallback strategies)
    /// failed.
    CannotRotate,
    /// `hold` was requested while `can_hold` is false.
    CannotHold,
    /// A spawned piece would overlap the lock stack.
    BlockOut,
    /// A piece locked entirely inside the vanish zone.
    LockOut,
}

impl TetrionError {
    /// True for the two conditions the driver treats as game-over.
    pub fn is_terminal(self) -> bool {
        matches!(self, TetrionError::BlockOut | TetrionError::LockOut)
    }
}

impl std::fmt::Display for TetrionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            TetrionError::InvalidPlacement => "target cell is occupied or out of range",
            TetrionError::CannotMove => "move would overlap or leave the field",
            TetrionError::CannotRotate => "no kick candidate produced a valid placement",
            TetrionError::CannotHold => "hold is not available for the current piece",
            TetrionError::BlockOut => "spawn overlaps the lock stack",
            TetrionError::LockOut => "piece locked entirely inside the vanish zone",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for TetrionError {}
