//! Bounded snapshot buffer behind the repetition rule.
//!
//! The rule only ever looks one move back: a push is rejected if it
//! recreates the position that stood immediately before the opponent's
//! last accepted move. That needs at most two boards at any instant:
//! the one saved when this move began, and the one saved when the
//! opponent's move began. The buffer is therefore pruned to a single
//! retained entry every time a move commits.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Board;

/// Snapshots of the board, most recent first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct History {
    boards: SmallVec<[Board; 2]>,
}

impl History {
    /// Record the board as it stands before a tentative push. Every
    /// `begin` is paired with exactly one `rollback` or `commit`.
    pub(crate) fn begin(&mut self, snapshot: Board) {
        self.boards.insert(0, snapshot);
    }

    /// Whether `board` matches the position preceding the opponent's
    /// last accepted move. Vacuously false on the game's first moves.
    pub(crate) fn repeats_prior_position(&self, board: &Board) -> bool {
        self.boards.get(1) == Some(board)
    }

    /// Abandon the move under evaluation, yielding the board to restore.
    pub(crate) fn rollback(&mut self) -> Board {
        self.boards.remove(0)
    }

    /// Accept the move under evaluation: the pre-move snapshot becomes
    /// the sole retained entry, everything staler is pruned.
    pub(crate) fn commit(&mut self) {
        self.boards.truncate(1);
    }

    /// Number of retained snapshots.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.boards.len()
    }
}
