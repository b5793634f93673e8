//! Piece balance invariant: X never trails O, and leads by at most one.

use super::Invariant;
use crate::{Board, GameEngine, Player};

/// Invariant: every snapshot has `#X == #O` or `#X == #O + 1`, with at most
/// three pieces per side.
pub struct PieceBalanceInvariant;

impl PieceBalanceInvariant {
    /// Checks a single snapshot.
    pub fn board_holds(board: &Board) -> bool {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        (x == o || x == o + 1) && x <= 3
    }
}

impl Invariant<GameEngine> for PieceBalanceInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.history().iter().all(Self::board_holds)
    }

    fn description() -> &'static str {
        "Every board has balanced piece counts"
    }
}
