//! Board geometry: coordinates, push directions, lane walking.
//!
//! The board is a fixed 7×7 grid. Row 0 is the far side ("forward" pushes
//! head toward it), row 6 the near side; columns grow to the right.
//!
//! [`Coord`] deliberately accepts out-of-range values: callers submit
//! arbitrary coordinates and the validator classifies bad ones as illegal
//! moves rather than panicking. Everything that walks the grid goes
//! through [`Coord::step`], the single bounds-checked neighbor operation.

use serde::{Deserialize, Serialize};

use super::board::Board;

/// Side length of the square board.
pub const BOARD_SIZE: usize = 7;

/// A board cell address, `(row, col)`.
///
/// Not guaranteed to be on the board; see [`Coord::in_bounds`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether this coordinate addresses a cell of the 7×7 grid.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// The neighboring cell one step in `direction`, or `None` if that
    /// step leaves the board.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Coord> {
        let (dr, dc) = direction.offset();
        let row = self.row.checked_add_signed(dr as isize)?;
        let col = self.col.checked_add_signed(dc as isize)?;
        let next = Coord::new(row, col);
        next.in_bounds().then_some(next)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A cardinal push direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Toward row 0 (up).
    Forward,
    /// Toward row 6 (down).
    Backward,
    /// Toward column 0.
    Left,
    /// Toward column 6.
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Forward,
        Direction::Backward,
        Direction::Left,
        Direction::Right,
    ];

    /// `(row, col)` delta of one step.
    #[must_use]
    pub const fn offset(self) -> (i8, i8) {
        match self {
            Direction::Forward => (-1, 0),
            Direction::Backward => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The opposite direction. A push originates from the side this
    /// points to; the cell one step this way is the "preceding" cell.
    #[must_use]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        write!(f, "{}", s)
    }
}

/// Cells from `from` (inclusive) to the board edge along `direction`.
pub fn ray(from: Coord, direction: Direction) -> impl Iterator<Item = Coord> {
    std::iter::successors(Some(from), move |c| c.step(direction))
}

/// Count contiguous occupied cells strictly ahead of `from` along
/// `direction`.
///
/// Returns `Some(count)` on reaching an empty cell (the gap the pushed
/// run will shift into), or `None` if the lane is packed all the way to
/// the board edge, meaning a push from `from` ejects the edge marble.
#[must_use]
pub fn count_ahead(board: &Board, from: Coord, direction: Direction) -> Option<usize> {
    let mut count = 0;
    for cell in ray(from, direction).skip(1) {
        if board.get(cell).is_some() {
            count += 1;
        } else {
            return Some(count);
        }
    }
    None
}
