//! Step bounds invariant: the current step always indexes recorded history.

use super::Invariant;
use crate::GameEngine;

/// Invariant: history is non-empty and `current_step < history.len()`.
pub struct StepInBoundsInvariant;

impl Invariant<GameEngine> for StepInBoundsInvariant {
    fn holds(engine: &GameEngine) -> bool {
        !engine.history().is_empty() && engine.current_step() < engine.history().len()
    }

    fn description() -> &'static str {
        "Current step indexes a recorded board"
    }
}
