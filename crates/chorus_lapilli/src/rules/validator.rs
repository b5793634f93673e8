//! Classification of a click against the phase rules and the center guard.

use super::adjacency::{adjacent, neighbors};
use super::win::check_winner;
use crate::{Board, Move, Phase, Player, Position, SelectionPolicy};
use tracing::{debug, instrument};

/// How the validator classified a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The board already has a winner; nothing may change.
    Frozen,
    /// Place the mover's piece on this empty cell.
    Place(Position),
    /// Select this piece of the mover's for a later slide.
    Select(Position),
    /// Slide the selected piece; the center guard allows it.
    Slide {
        /// Selected cell.
        from: Position,
        /// Empty adjacent destination.
        to: Position,
    },
    /// Slide the selected piece; the center guard forbids it.
    CenterGuardViolation {
        /// Selected cell.
        from: Position,
        /// Empty adjacent destination.
        to: Position,
    },
    /// The click does not match any rule.
    Ignore,
}

/// Center-guard rule.
///
/// A player holding the center must either win with the slide or slide the
/// center piece itself.
pub struct CenterGuard;

impl CenterGuard {
    /// The guarded cell.
    pub const CENTER: Position = Position::Center;

    /// Checks whether sliding `from` -> `to` is allowed for `mover`.
    #[instrument(level = "trace", skip(board))]
    pub fn allows(board: &Board, mover: Player, from: Position, to: Position) -> bool {
        if !board.get(Self::CENTER).is_held_by(mover) || from == Self::CENTER {
            return true;
        }
        check_winner(&board.slide(from, to)).is_some()
    }
}

/// Classifies clicks for one side on one board.
#[derive(Debug, Clone, Copy, derive_new::new)]
pub struct MoveValidator<'a> {
    board: &'a Board,
    mover: Player,
    phase: Phase,
    selected: Option<Position>,
    policy: SelectionPolicy,
}

impl MoveValidator<'_> {
    /// Classifies a click on `target`. First matching rule wins.
    #[instrument(
        level = "debug",
        skip(self),
        fields(mover = %self.mover, phase = ?self.phase, selected = ?self.selected)
    )]
    pub fn classify(&self, target: Position) -> Verdict {
        let verdict = self.evaluate(target);
        debug!(?verdict, "Classified click");
        verdict
    }

    fn evaluate(&self, target: Position) -> Verdict {
        if check_winner(self.board).is_some() {
            return Verdict::Frozen;
        }

        let cell = self.board.get(target);
        match self.phase {
            Phase::Placement if self.board.is_empty(target) => Verdict::Place(target),
            Phase::Placement => Verdict::Ignore,
            Phase::Movement if cell.is_held_by(self.mover) && self.may_select(target) => {
                Verdict::Select(target)
            }
            Phase::Movement => match self.selected {
                Some(from) if self.board.is_empty(target) && adjacent(from, target) => {
                    if CenterGuard::allows(self.board, self.mover, from, target) {
                        Verdict::Slide { from, to: target }
                    } else {
                        Verdict::CenterGuardViolation { from, to: target }
                    }
                }
                _ => Verdict::Ignore,
            },
        }
    }

    /// Under [`SelectionPolicy::Locked`] a piece with no empty neighbor is
    /// never selectable, so a held selection always has a slide to attempt.
    fn may_select(&self, target: Position) -> bool {
        match self.policy {
            SelectionPolicy::Permissive => true,
            SelectionPolicy::Locked => {
                self.selected.is_none() && neighbors(target).any(|pos| self.board.is_empty(pos))
            }
        }
    }
}

/// Lists every history-producing move available to `mover`.
///
/// Empty once the board has a winner.
#[instrument(level = "debug", skip(board))]
pub fn legal_moves(board: &Board, mover: Player, phase: Phase) -> Vec<Move> {
    if check_winner(board).is_some() {
        return Vec::new();
    }

    match phase {
        Phase::Placement => Position::ALL
            .into_iter()
            .filter(|pos| board.is_empty(*pos))
            .map(Move::Place)
            .collect(),
        Phase::Movement => board
            .pieces(mover)
            .flat_map(move |from| {
                neighbors(from)
                    .filter(move |to| board.is_empty(*to))
                    .filter(move |to| CenterGuard::allows(board, mover, from, *to))
                    .map(move |to| Move::Slide { from, to })
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(layout: &str) -> Board {
        layout.parse().unwrap()
    }

    fn validator(
        board: &Board,
        phase: Phase,
        selected: Option<Position>,
        policy: SelectionPolicy,
    ) -> MoveValidator<'_> {
        MoveValidator::new(board, Player::X, phase, selected, policy)
    }

    #[test]
    fn test_place_on_empty_cell() {
        let b = board("X.. .O. ...");
        let v = validator(&b, Phase::Placement, None, SelectionPolicy::Permissive);
        assert_eq!(v.classify(Position::TopRight), Verdict::Place(Position::TopRight));
    }

    #[test]
    fn test_place_on_occupied_cell_ignored() {
        let b = board("X.. .O. ...");
        let v = validator(&b, Phase::Placement, None, SelectionPolicy::Permissive);
        assert_eq!(v.classify(Position::TopLeft), Verdict::Ignore);
        assert_eq!(v.classify(Position::Center), Verdict::Ignore);
    }

    #[test]
    fn test_movement_requires_selection_to_fill_empty_cell() {
        let b = board("XOX OXO ...");
        let v = validator(&b, Phase::Movement, None, SelectionPolicy::Permissive);
        assert_eq!(v.classify(Position::BottomLeft), Verdict::Ignore);
    }

    #[test]
    fn test_select_own_piece_only() {
        let b = board("XOX OXO ...");
        let v = validator(&b, Phase::Movement, None, SelectionPolicy::Permissive);
        assert_eq!(v.classify(Position::TopLeft), Verdict::Select(Position::TopLeft));
        assert_eq!(v.classify(Position::TopCenter), Verdict::Ignore);
    }

    #[test]
    fn test_non_adjacent_destination_ignored() {
        let b = board("XOX OXO ...");
        let v = validator(
            &b,
            Phase::Movement,
            Some(Position::TopLeft),
            SelectionPolicy::Permissive,
        );
        assert_eq!(v.classify(Position::BottomRight), Verdict::Ignore);
    }

    #[test]
    fn test_center_guard_blocks_non_winning_slide() {
        // X: 0, 4, 5. Sliding 5 -> 2 leaves no line.
        let b = board("XO. OXX ..O");
        let v = validator(
            &b,
            Phase::Movement,
            Some(Position::MiddleRight),
            SelectionPolicy::Permissive,
        );
        assert_eq!(
            v.classify(Position::TopRight),
            Verdict::CenterGuardViolation {
                from: Position::MiddleRight,
                to: Position::TopRight
            }
        );
    }

    #[test]
    fn test_center_guard_allows_winning_slide() {
        // X: 0, 4, 5. Sliding 5 -> 8 completes the 0-4-8 diagonal.
        let b = board("XO. OXX O..");
        let v = validator(
            &b,
            Phase::Movement,
            Some(Position::MiddleRight),
            SelectionPolicy::Permissive,
        );
        assert_eq!(
            v.classify(Position::BottomRight),
            Verdict::Slide {
                from: Position::MiddleRight,
                to: Position::BottomRight
            }
        );
    }

    #[test]
    fn test_center_guard_allows_moving_center_piece() {
        let b = board("XO. OXX ..O");
        let v = validator(
            &b,
            Phase::Movement,
            Some(Position::Center),
            SelectionPolicy::Permissive,
        );
        assert_eq!(
            v.classify(Position::BottomLeft),
            Verdict::Slide {
                from: Position::Center,
                to: Position::BottomLeft
            }
        );
    }

    #[test]
    fn test_center_guard_ignores_player_without_center() {
        assert!(CenterGuard::allows(
            &board("XOX .O. X.O"),
            Player::X,
            Position::TopLeft,
            Position::MiddleLeft
        ));
    }

    #[test]
    fn test_frozen_after_win() {
        let b = board("XXX OO. O..");
        let v = validator(&b, Phase::Movement, None, SelectionPolicy::Permissive);
        assert_eq!(v.classify(Position::TopLeft), Verdict::Frozen);
        assert_eq!(v.classify(Position::BottomRight), Verdict::Frozen);
    }

    #[test]
    fn test_permissive_reselects() {
        let b = board("XOX OXO ...");
        let v = validator(
            &b,
            Phase::Movement,
            Some(Position::TopLeft),
            SelectionPolicy::Permissive,
        );
        assert_eq!(v.classify(Position::TopRight), Verdict::Select(Position::TopRight));
    }

    #[test]
    fn test_locked_keeps_first_selection() {
        let b = board("XOX OXO ...");
        let v = validator(
            &b,
            Phase::Movement,
            Some(Position::TopLeft),
            SelectionPolicy::Locked,
        );
        assert_eq!(v.classify(Position::TopRight), Verdict::Ignore);
    }

    #[test]
    fn test_locked_skips_boxed_in_piece() {
        // X on 1 has no empty neighbor; X on 3 borders 6 and 7.
        let b = board("OXO XXO ...");
        let v = validator(&b, Phase::Movement, None, SelectionPolicy::Locked);
        assert_eq!(v.classify(Position::TopCenter), Verdict::Ignore);
        assert_eq!(v.classify(Position::MiddleLeft), Verdict::Select(Position::MiddleLeft));

        let v = validator(&b, Phase::Movement, None, SelectionPolicy::Permissive);
        assert_eq!(v.classify(Position::TopCenter), Verdict::Select(Position::TopCenter));
    }

    #[test]
    fn test_legal_moves_placement() {
        let b = board("X.. .O. ...");
        assert_eq!(legal_moves(&b, Player::X, Phase::Placement).len(), 7);
    }

    #[test]
    fn test_legal_moves_respect_center_guard() {
        // X: 0, 4, 5. Only the center piece or a winning slide may move.
        let b = board("XO. OXX ..O");
        let moves = legal_moves(&b, Player::X, Phase::Movement);
        assert!(moves.contains(&Move::Slide {
            from: Position::Center,
            to: Position::TopRight
        }));
        assert!(!moves.contains(&Move::Slide {
            from: Position::MiddleRight,
            to: Position::TopRight
        }));
        assert!(moves.iter().all(|m| matches!(
            m,
            Move::Slide {
                from: Position::Center,
                ..
            }
        )));
    }

    #[test]
    fn test_no_legal_moves_after_win() {
        let b = board("XXX OO. O..");
        assert!(legal_moves(&b, Player::O, Phase::Movement).is_empty());
    }
}
