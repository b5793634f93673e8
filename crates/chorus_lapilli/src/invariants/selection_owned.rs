//! Selection ownership invariant.

use super::Invariant;
use crate::GameEngine;

/// Invariant: a selected piece always belongs to the side to move.
pub struct SelectionOwnedInvariant;

impl Invariant<GameEngine> for SelectionOwnedInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine
            .selected_piece()
            .is_none_or(|pos| engine.current_board().get(pos).is_held_by(engine.to_move()))
    }

    fn description() -> &'static str {
        "Selected piece belongs to the side to move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_with_selection() {
        let mut engine = GameEngine::new();
        for cell in [4, 0, 1, 2, 3, 5, 1] {
            engine.select_cell(cell).unwrap();
        }
        assert!(engine.selected_piece().is_some());
        assert!(SelectionOwnedInvariant::holds(&engine));
    }
}
