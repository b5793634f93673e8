//! Moves, action outcomes and engine errors.
//!
//! A click on a cell is classified into an [`ActionOutcome`]. Only
//! programmer-level misuse surfaces as an [`EngineError`]; player mistakes
//! are reported through the outcome and the engine state.

use crate::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A history-producing move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Place a new piece on an empty cell (placement phase).
    Place(Position),
    /// Slide a piece to an adjacent empty cell (movement phase).
    Slide {
        /// Cell being vacated.
        from: Position,
        /// Destination cell.
        to: Position,
    },
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Place(pos) => write!(f, "place {}", pos.label()),
            Move::Slide { from, to } => write!(f, "{} -> {}", from.label(), to.label()),
        }
    }
}

/// What a call to `select_cell` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionOutcome {
    /// A piece was placed and the turn advanced.
    Placed(Position),
    /// A piece was selected; the turn did not advance.
    Selected(Position),
    /// A piece slid to a new cell and the turn advanced.
    Moved {
        /// Cell vacated.
        from: Position,
        /// Cell now occupied.
        to: Position,
    },
    /// The slide broke the center-guard rule; the selection was dropped
    /// and the invalid-move flag raised.
    Rejected {
        /// Cell the piece would have left.
        from: Position,
        /// Cell the piece would have reached.
        to: Position,
    },
    /// The click had no effect on the engine.
    Ignored,
}

impl ActionOutcome {
    /// Returns true if the outcome appended a new board to history.
    pub fn advanced(&self) -> bool {
        matches!(self, ActionOutcome::Placed(_) | ActionOutcome::Moved { .. })
    }
}

/// Misuse of the engine API by its caller.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// Navigation target lies outside the recorded history.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Current history length.
        len: usize,
    },

    /// Cell index outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    CellOutOfRange(#[error(not(source))] usize),
}
