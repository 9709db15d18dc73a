//! The push executor: one generic shift-with-eject over a lane.
//!
//! All four directions run the same algorithm on the lane of cells from
//! the acting marble to the board edge. Either the run of marbles slides
//! one step into the first empty cell, or, if the lane is packed, the
//! whole lane slides and the edge marble goes over.

use smallvec::SmallVec;

use crate::core::geometry::{count_ahead, ray};
use crate::core::{Board, Coord, Direction, Marble, BOARD_SIZE};

/// Push the marble at `from` one step along `direction`, dragging the
/// contiguous run ahead of it.
///
/// Returns the marble ejected over the board edge, if the lane had no
/// gap. The acting cell is empty afterwards either way.
///
/// Callers must have validated `from`: in bounds, occupied, and free to
/// push from.
pub(crate) fn push_line(board: &mut Board, from: Coord, direction: Direction) -> Option<Marble> {
    let lane: SmallVec<[Coord; BOARD_SIZE]> = ray(from, direction).collect();

    // `shift_to` is the lane index the run slides up to: the first empty
    // cell when there is a gap, the edge cell when there is not.
    let (shift_to, ejected) = match count_ahead(board, from, direction) {
        Some(gap) => (gap + 1, None),
        None => (lane.len() - 1, board.get(lane[lane.len() - 1])),
    };

    for i in (1..=shift_to).rev() {
        let behind = board.get(lane[i - 1]);
        board.set(lane[i], behind);
    }
    board.set(from, None);

    ejected
}
