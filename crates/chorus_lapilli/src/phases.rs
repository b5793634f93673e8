//! Rule phases and conceptual engine stages.
//!
//! Neither is ever stored: both are recomputed from the history step and the
//! current board, so navigating back in time restores the matching rules.

use serde::{Deserialize, Serialize};

/// Which rule set governs the next ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Pieces are added to empty cells (steps 0-5).
    Placement,
    /// Pieces slide to adjacent empty cells (step 6 onwards).
    Movement,
}

impl Phase {
    /// Number of plies spent placing pieces.
    pub const PLACEMENT_PLIES: usize = 6;

    /// Returns the phase in force at the given history step.
    pub fn for_step(step: usize) -> Self {
        if step < Self::PLACEMENT_PLIES {
            Phase::Placement
        } else {
            Phase::Movement
        }
    }
}

/// Conceptual state of the engine, as seen by a presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Placement phase, waiting for a piece to be placed.
    Placing,
    /// Movement phase, no piece selected.
    AwaitingSelection,
    /// Movement phase, a piece is selected and awaits a destination.
    PieceSelected,
    /// The current board has a winner; only navigation is possible.
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_boundary() {
        assert_eq!(Phase::for_step(0), Phase::Placement);
        assert_eq!(Phase::for_step(5), Phase::Placement);
        assert_eq!(Phase::for_step(6), Phase::Movement);
        assert_eq!(Phase::for_step(41), Phase::Movement);
    }
}
