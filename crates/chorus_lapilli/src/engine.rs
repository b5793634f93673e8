//! Game engine: board history, selection state and time travel.
//!
//! The engine stores only the history, the current step and the transient
//! selection/invalid-move flags. Side to move, rule phase and stage are all
//! derived from the step and the current board.

use crate::invariants::{EngineInvariants, InvariantSet};
use crate::rules::{MoveValidator, Verdict, check_winner, legal_moves};
use crate::status::{CellColor, StatusFormatter};
use crate::{
    ActionOutcome, Board, Cell, EngineConfig, EngineError, Move, Phase, Player, Position, Stage,
};
use tracing::{debug, info, instrument, warn};

/// Chorus Lapilli game engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    history: Vec<Board>,
    current_step: usize,
    selected_piece: Option<Position>,
    invalid_move: bool,
    config: EngineConfig,
}

impl GameEngine {
    /// Creates a new game with the default configuration.
    #[instrument]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates a new game with the given configuration.
    #[instrument]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            history: vec![Board::new()],
            current_step: 0,
            selected_piece: None,
            invalid_move: false,
            config,
        }
    }

    /// Handles a click on cell `index` (0-8).
    ///
    /// Player mistakes are not errors: they come back as
    /// [`ActionOutcome::Ignored`] or [`ActionOutcome::Rejected`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CellOutOfRange`] if `index` is not a board cell.
    #[instrument(skip(self), fields(step = self.current_step, mover = %self.to_move()))]
    pub fn select_cell(&mut self, index: usize) -> Result<ActionOutcome, EngineError> {
        let target = Position::from_index(index).ok_or_else(|| {
            warn!(index, "Cell index out of range");
            EngineError::CellOutOfRange(index)
        })?;

        let board = *self.current_board();
        let mover = self.to_move();
        let verdict = MoveValidator::new(
            &board,
            mover,
            self.phase(),
            self.selected_piece,
            *self.config.selection(),
        )
        .classify(target);

        let outcome = match verdict {
            Verdict::Frozen | Verdict::Ignore => return Ok(ActionOutcome::Ignored),
            Verdict::Place(pos) => {
                self.commit(board.with(pos, Cell::Occupied(mover)));
                ActionOutcome::Placed(pos)
            }
            Verdict::Select(pos) => {
                self.selected_piece = Some(pos);
                self.invalid_move = false;
                ActionOutcome::Selected(pos)
            }
            Verdict::Slide { from, to } => {
                self.commit(board.slide(from, to));
                ActionOutcome::Moved { from, to }
            }
            Verdict::CenterGuardViolation { from, to } => {
                self.selected_piece = None;
                self.invalid_move = true;
                ActionOutcome::Rejected { from, to }
            }
        };

        debug!(?outcome, step = self.current_step, "Action processed");
        self.assert_invariants();
        Ok(outcome)
    }

    /// Navigates to a recorded step.
    ///
    /// Clears the selection and the invalid-move flag. History is kept until
    /// the next move, which discards every step after `step`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::StepOutOfRange`] if `step` is not recorded.
    #[instrument(skip(self), fields(from = self.current_step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), EngineError> {
        if step >= self.history.len() {
            warn!(step, len = self.history.len(), "Jump outside history");
            return Err(EngineError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }

        self.current_step = step;
        self.selected_piece = None;
        self.invalid_move = false;
        info!(step, "Jumped to step");
        self.assert_invariants();
        Ok(())
    }

    /// Truncates any abandoned future and appends `board` as the next step.
    fn commit(&mut self, board: Board) {
        let discarded = self.history.len() - (self.current_step + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding abandoned history");
        }
        self.history.truncate(self.current_step + 1);
        self.history.push(board);
        self.current_step += 1;
        self.selected_piece = None;
        self.invalid_move = false;
    }

    fn assert_invariants(&self) {
        let result = EngineInvariants::check_all(self);
        if let Err(violations) = &result {
            warn!(?violations, "Engine invariants violated");
        }
        debug_assert!(result.is_ok(), "Engine invariants violated");
    }

    /// Board at the current step.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_step]
    }

    /// Every recorded board, starting with the empty board.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the displayed board in [`history`](Self::history).
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Piece awaiting a destination, if any.
    pub fn selected_piece(&self) -> Option<Position> {
        self.selected_piece
    }

    /// Whether the last processed slide broke the center guard.
    pub fn invalid_move(&self) -> bool {
        self.invalid_move
    }

    /// Engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// True iff X moves at the current step.
    pub fn x_is_next(&self) -> bool {
        self.to_move() == Player::X
    }

    /// Side to move at the current step.
    pub fn to_move(&self) -> Player {
        Player::for_step(self.current_step)
    }

    /// Rule phase at the current step.
    pub fn phase(&self) -> Phase {
        Phase::for_step(self.current_step)
    }

    /// Winner on the current board, if any.
    pub fn winner(&self) -> Option<Player> {
        check_winner(self.current_board())
    }

    /// Conceptual stage of the game at the current step.
    pub fn stage(&self) -> Stage {
        if self.winner().is_some() {
            Stage::GameOver
        } else if self.phase() == Phase::Placement {
            Stage::Placing
        } else if self.selected_piece.is_some() {
            Stage::PieceSelected
        } else {
            Stage::AwaitingSelection
        }
    }

    /// Status line for display.
    pub fn status(&self) -> String {
        StatusFormatter::format(self.winner(), self.to_move(), self.invalid_move)
    }

    /// True iff `index` is the selected piece.
    pub fn highlight(&self, index: usize) -> bool {
        self.selected_piece.map(Position::to_index) == Some(index)
    }

    /// Background color for cell `index`.
    pub fn cell_color(&self, index: usize) -> CellColor {
        if self.highlight(index) {
            CellColor::Highlight
        } else {
            CellColor::Normal
        }
    }

    /// One navigation label per history entry.
    pub fn history_labels(&self) -> Vec<String> {
        (0..self.history.len())
            .map(|step| match step {
                0 => "Go to game start".to_string(),
                n => format!("Go to move #{}", n),
            })
            .collect()
    }

    /// Moves `select_cell` would accept as history-producing from here.
    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(self.current_board(), self.to_move(), self.phase())
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
