//! Chorus Lapilli rule engine.
//!
//! Chorus Lapilli is tic-tac-toe in two phases: each side first places three
//! pieces, then slides them to adjacent empty cells. A player holding the
//! center must win with their slide or move the center piece itself.
//!
//! # Architecture
//!
//! - **Types**: immutable [`Board`] snapshots of [`Cell`]s
//! - **Rules**: win detection, king-move adjacency and the [`MoveValidator`]
//! - **Engine**: [`GameEngine`] owns board history and supports time travel
//! - **Status**: [`StatusFormatter`] renders the line shown under the board
//!
//! # Example
//!
//! ```
//! use chorus_lapilli::{ActionOutcome, GameEngine, Position};
//!
//! let mut engine = GameEngine::new();
//! assert_eq!(engine.select_cell(4)?, ActionOutcome::Placed(Position::Center));
//! assert_eq!(engine.status(), "Next player: O");
//!
//! engine.jump_to(0)?;
//! assert!(engine.x_is_next());
//! # Ok::<(), chorus_lapilli::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod engine;
pub mod invariants;
mod phases;
mod position;
pub mod rules;
mod status;
mod types;

// Crate-level exports - Domain types
pub use position::Position;
pub use types::{Board, Cell, ParseBoardError, Player};

// Crate-level exports - Moves and errors
pub use action::{ActionOutcome, EngineError, Move};

// Crate-level exports - Rules
pub use phases::{Phase, Stage};
pub use rules::{CenterGuard, MoveValidator, Verdict};

// Crate-level exports - Engine
pub use config::{ConfigError, EngineConfig, SelectionPolicy};
pub use engine::GameEngine;
pub use status::{CellColor, INVALID_MOVE_NOTICE, StatusFormatter};
