//! Marble kinds and player colors.
//!
//! ## Marble
//!
//! What a board cell can hold: a white or black player marble, or a
//! neutral red marble. Empty cells are `Option::<Marble>::None`.
//!
//! ## Color
//!
//! The player-ownable subset of [`Marble`]. Keeping this a separate type
//! means a player can never be assigned red at the type level; setup
//! validation only has to reject duplicates.

use serde::{Deserialize, Serialize};

/// One marble on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marble {
    White,
    Black,
    /// Neutral. Pushing one of these off the board captures it.
    Red,
}

impl Marble {
    /// The color owning this marble, or `None` for red.
    #[must_use]
    pub const fn owner(self) -> Option<Color> {
        match self {
            Marble::White => Some(Color::White),
            Marble::Black => Some(Color::Black),
            Marble::Red => None,
        }
    }
}

impl std::fmt::Display for Marble {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let c = match self {
            Marble::White => 'W',
            Marble::Black => 'B',
            Marble::Red => 'R',
        };
        write!(f, "{}", c)
    }
}

/// A player color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The marble kind this color puts on the board.
    #[must_use]
    pub const fn marble(self) -> Marble {
        match self {
            Color::White => Marble::White,
            Color::Black => Marble::Black,
        }
    }

    /// The other color.
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.marble())
    }
}

/// Per-kind tally of marbles currently on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarbleCounts {
    pub white: u32,
    pub black: u32,
    pub red: u32,
}

impl MarbleCounts {
    /// Marbles of a given player color.
    #[must_use]
    pub const fn of_color(self, color: Color) -> u32 {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    /// Total marbles on the board.
    #[must_use]
    pub const fn total(self) -> u32 {
        self.white + self.black + self.red
    }
}
