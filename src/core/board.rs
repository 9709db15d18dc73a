//! The 7×7 board.
//!
//! A plain grid of `Option<Marble>` with value semantics: `Clone` is the
//! snapshot operation the engine uses before every tentative push, and
//! `PartialEq` is the whole-position comparison behind the repetition
//! rule. All mutation goes through [`Board::set`].

use serde::{Deserialize, Serialize};

use super::geometry::{Coord, BOARD_SIZE};
use super::marble::{Marble, MarbleCounts};

/// The game board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Marble>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// A board with no marbles on it.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// The canonical opening position: 8 white marbles in the northwest
    /// and southeast corner blocks, 8 black in the northeast and
    /// southwest blocks, 13 red in the central cross.
    ///
    /// ```text
    /// W W . . . B B
    /// W W . R . B B
    /// . . R R R . .
    /// . R R R R R .
    /// . . R R R . .
    /// B B . R . W W
    /// B B . . . W W
    /// ```
    #[must_use]
    pub fn starting_layout() -> Self {
        const W: Option<Marble> = Some(Marble::White);
        const B: Option<Marble> = Some(Marble::Black);
        const R: Option<Marble> = Some(Marble::Red);
        const X: Option<Marble> = None;

        Self {
            cells: [
                [W, W, X, X, X, B, B],
                [W, W, X, R, X, B, B],
                [X, X, R, R, R, X, X],
                [X, R, R, R, R, R, X],
                [X, X, R, R, R, X, X],
                [B, B, X, R, X, W, W],
                [B, B, X, X, X, W, W],
            ],
        }
    }

    /// The marble at `coord`, or `None` for an empty cell.
    ///
    /// `coord` must be in bounds; the validator screens caller-supplied
    /// coordinates before any board access.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<Marble> {
        debug_assert!(coord.in_bounds());
        self.cells[coord.row][coord.col]
    }

    /// Place `marble` (or clear the cell, with `None`) at `coord`.
    pub fn set(&mut self, coord: Coord, marble: Option<Marble>) {
        debug_assert!(coord.in_bounds());
        self.cells[coord.row][coord.col] = marble;
    }

    /// Iterate over every cell, `(coord, contents)`.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Option<Marble>)> + '_ {
        (0..BOARD_SIZE).flat_map(move |row| {
            (0..BOARD_SIZE).map(move |col| {
                let coord = Coord::new(row, col);
                (coord, self.cells[row][col])
            })
        })
    }

    /// Tally of marbles currently on the board, by kind.
    #[must_use]
    pub fn marble_counts(&self) -> MarbleCounts {
        let mut counts = MarbleCounts::default();
        for (_, cell) in self.cells() {
            match cell {
                Some(Marble::White) => counts.white += 1,
                Some(Marble::Black) => counts.black += 1,
                Some(Marble::Red) => counts.red += 1,
                None => {}
            }
        }
        counts
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting_layout()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                match cell {
                    Some(marble) => write!(f, "{}", marble)?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
