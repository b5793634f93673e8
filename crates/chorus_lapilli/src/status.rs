//! Human-readable status line and cell colors for presentation layers.

use crate::Player;
use serde::{Deserialize, Serialize};

/// Notice appended to the status line after a center-guard violation.
pub const INVALID_MOVE_NOTICE: &str = " — Invalid move: Either win or move from center.";

/// Builds the status line shown under the board.
pub struct StatusFormatter;

impl StatusFormatter {
    /// Formats the status line.
    ///
    /// A winner takes precedence over both the side to move and the
    /// invalid-move notice.
    pub fn format(winner: Option<Player>, to_move: Player, invalid_move: bool) -> String {
        match winner {
            Some(player) => format!("Winner: {}", player),
            None if invalid_move => format!("Next player: {}{}", to_move, INVALID_MOVE_NOTICE),
            None => format!("Next player: {}", to_move),
        }
    }
}

/// Background color of a rendered cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellColor {
    /// Unselected cell.
    #[default]
    Normal,
    /// The currently selected piece.
    Highlight,
}

impl CellColor {
    /// Hex color code.
    pub fn hex(self) -> &'static str {
        match self {
            CellColor::Normal => "#ffffff",
            CellColor::Highlight => "#cccccc",
        }
    }
}
