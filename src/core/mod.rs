//! Core value types: marbles, board geometry, the board, the roster.
//!
//! Everything here is a plain value with no game-flow logic. The rules
//! (legality, pushing, win evaluation) live in [`crate::engine`].

pub mod board;
pub mod geometry;
pub mod marble;
pub mod player;

pub use board::Board;
pub use geometry::{Coord, Direction, BOARD_SIZE};
pub use marble::{Color, Marble, MarbleCounts};
pub use player::{Player, Roster, Seat, SeatMap};
