//! Line commands typed at the prompt.

use derive_more::{Display, Error};
use std::str::FromStr;

/// A parsed prompt command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Click a cell (0-8).
    Select(usize),
    /// Navigate to a history step.
    Jump(usize),
    /// List history entries.
    History,
    /// List accepted moves from the current board.
    Moves,
    /// Redraw the board.
    Board,
    /// Show the command list.
    Help,
    /// Leave the game.
    Quit,
}

/// Error parsing a prompt line.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CommandError {
    /// Unrecognised command word.
    #[display("Unknown command: {}", _0)]
    Unknown(#[error(not(source))] String),
    /// Command needs a numeric argument.
    #[display("'{}' needs a number", _0)]
    MissingArgument(#[error(not(source))] &'static str),
    /// Argument was not a number.
    #[display("Not a number: {}", _0)]
    BadNumber(#[error(not(source))] String),
}

fn number(word: &'static str, arg: Option<&str>) -> Result<usize, CommandError> {
    let arg = arg.ok_or(CommandError::MissingArgument(word))?;
    arg.parse()
        .map_err(|_| CommandError::BadNumber(arg.to_string()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let head = words.next().unwrap_or_default().to_lowercase();
        let arg = words.next();

        match head.as_str() {
            "select" | "s" => number("select", arg).map(Command::Select),
            "jump" | "j" => number("jump", arg).map(Command::Jump),
            "history" | "h" => Ok(Command::History),
            "moves" | "m" => Ok(Command::Moves),
            "board" | "b" => Ok(Command::Board),
            "help" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            other => other
                .parse()
                .map(Command::Select)
                .map_err(|_| CommandError::Unknown(other.to_string())),
        }
    }
}

/// Help text listing every command.
pub const HELP: &str = "\
Commands:
  select <0-8>   click a cell (a bare number works too)
  jump <step>    go back to a recorded step
  history        list recorded steps
  moves          list moves available from this board
  board          redraw the board
  help           show this list
  quit           leave the game";
