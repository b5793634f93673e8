//! King-move adjacency on the 3x3 grid.

use crate::Position;

/// Returns true if `a` and `b` are king-move neighbors (Chebyshev distance 1).
///
/// No wraparound; a cell is never adjacent to itself.
pub fn adjacent(a: Position, b: Position) -> bool {
    let dx = a.column().abs_diff(b.column());
    let dy = a.row().abs_diff(b.row());
    dx.max(dy) == 1
}

/// Iterates the neighbors of `pos` in index order.
pub fn neighbors(pos: Position) -> impl Iterator<Item = Position> {
    Position::ALL
        .into_iter()
        .filter(move |other| adjacent(pos, *other))
}
