use crate::engine::formation::Phase;
use crate::engine::snapshot::Side;
use thiserror::Error;

/// Why a behavior produced no commands this tick.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecisionError {
    #[error("player #{number} not found on the {side} roster")]
    MissingPlayer { side: Side, number: u32 },

    #[error("ball has no holder")]
    MissingBallHolder,

    #[error("{side} roster is empty")]
    EmptyRoster { side: Side },

    #[error("formation lookup failed: {0}")]
    Formation(#[from] FormationError),
}

impl DecisionError {
    /// Recoverable errors skip the tick; anything else is a data-table bug.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, DecisionError::Formation(_))
    }
}

/// Formation table defects. Surfaced at load time, never swallowed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormationError {
    #[error("no slot for player #{number} in {phase:?} phase")]
    MissingSlot { phase: Phase, number: u32 },

    #[error("player #{0} has no formation slot (valid: 2..=11)")]
    NumberOutOfRange(u32),

    #[error("slot ({col}, {row}) for player #{number} in {phase:?} is outside the {cols}x{rows} grid")]
    CellOutOfGrid {
        phase: Phase,
        number: u32,
        col: u32,
        row: u32,
        cols: u32,
        rows: u32,
    },

    #[error("duplicate slot for player #{number} in {phase:?} phase")]
    DuplicateSlot { phase: Phase, number: u32 },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Invalid formation table: {0}")]
    Formation(#[from] FormationError),
}

pub type DecisionResult<T> = std::result::Result<T, DecisionError>;
