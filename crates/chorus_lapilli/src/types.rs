//! Core domain types for Chorus Lapilli.

use crate::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Player {
    /// Player X (moves on even steps).
    #[display("X")]
    X,
    /// Player O (moves on odd steps).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the side to move at the given history step.
    ///
    /// X always moves on even steps, O on odd ones.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Player::X } else { Player::O }
    }
}

/// A cell on the 3x3 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a player's piece.
    Occupied(Player),
}

impl Cell {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Returns true if the cell holds a piece belonging to `player`.
    pub fn is_held_by(self, player: Player) -> bool {
        self == Cell::Occupied(player)
    }
}

/// Immutable snapshot of the 3x3 board.
///
/// Boards are `Copy`: every transition produces a new snapshot, so history
/// entries never alias each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Returns a copy of this board with `pos` set to `cell`.
    #[must_use]
    pub fn with(&self, pos: Position, cell: Cell) -> Self {
        let mut cells = self.cells;
        cells[pos.to_index()] = cell;
        Self { cells }
    }

    /// Returns a copy of this board with the piece on `from` relocated to `to`.
    #[must_use]
    pub fn slide(&self, from: Position, to: Position) -> Self {
        self.with(to, self.get(from)).with(from, Cell::Empty)
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Counts the pieces `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|c| c.is_held_by(player)).count()
    }

    /// Returns the positions holding `player`'s pieces.
    pub fn pieces(&self, player: Player) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(move |pos| self.get(*pos).is_held_by(player))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Error returned when a board layout string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// The layout did not contain exactly nine cells.
    #[display("Board layout needs 9 cells, found {}", _0)]
    WrongLength(#[error(not(source))] usize),
    /// The layout contained a character other than `X`, `O`, `.` or `-`.
    #[display("Unexpected board character {:?}", _0)]
    BadCell(#[error(not(source))] char),
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses a nine-cell layout such as `"XX.O.O..."`.
    ///
    /// Whitespace and `|` separators are skipped; `.` and `-` mark empty cells.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .collect();
        if symbols.len() != 9 {
            return Err(ParseBoardError::WrongLength(symbols.len()));
        }

        let mut cells = [Cell::Empty; 9];
        for (cell, symbol) in cells.iter_mut().zip(symbols) {
            *cell = match symbol.to_ascii_uppercase() {
                'X' => Cell::Occupied(Player::X),
                'O' => Cell::Occupied(Player::O),
                '.' | '-' => Cell::Empty,
                other => return Err(ParseBoardError::BadCell(other)),
            };
        }
        Ok(Self { cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_step_alternates() {
        assert_eq!(Player::for_step(0), Player::X);
        assert_eq!(Player::for_step(1), Player::O);
        assert_eq!(Player::for_step(6), Player::X);
    }

    #[test]
    fn test_with_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with(Position::Center, Cell::Occupied(Player::X));
        assert!(board.is_empty(Position::Center));
        assert_eq!(next.get(Position::Center), Cell::Occupied(Player::X));
    }

    #[test]
    fn test_slide_moves_piece() {
        let board: Board = "X........".parse().unwrap();
        let after = board.slide(Position::TopLeft, Position::Center);
        assert!(after.is_empty(Position::TopLeft));
        assert_eq!(after.get(Position::Center), Cell::Occupied(Player::X));
        assert_eq!(after.count(Player::X), 1);
    }

    #[test]
    fn test_parse_layout() {
        let board: Board = "XO. | .X. | ..O".parse().unwrap();
        assert_eq!(board.count(Player::X), 2);
        assert_eq!(board.count(Player::O), 2);
        assert_eq!(board.get(Position::TopCenter), Cell::Occupied(Player::O));
    }

    #[test]
    fn test_parse_rejects_bad_layouts() {
        assert_eq!(
            "XO".parse::<Board>(),
            Err(ParseBoardError::WrongLength(2))
        );
        assert_eq!(
            "XOZ......".parse::<Board>(),
            Err(ParseBoardError::BadCell('Z'))
        );
    }
}
