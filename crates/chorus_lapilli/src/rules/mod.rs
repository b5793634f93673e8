//! Game rules for Chorus Lapilli.
//!
//! Pure functions over board snapshots. The engine owns state; these modules
//! only classify and evaluate.

pub mod adjacency;
pub mod validator;
pub mod win;

pub use adjacency::{adjacent, neighbors};
pub use validator::{CenterGuard, MoveValidator, Verdict, legal_moves};
pub use win::{LINES, check_winner, winning_line};
