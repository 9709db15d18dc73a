//! Player identity and per-seat data storage.
//!
//! ## Seat
//!
//! The two chairs at the table. Seats are fixed for the life of a game;
//! names and colors attach to seats via the [`Roster`].
//!
//! ## Roster
//!
//! The immutable pair of players. Construction validates what the type
//! system cannot: distinct colors and non-empty names.
//!
//! ## SeatMap
//!
//! Per-seat data with O(1) access, indexable by [`Seat`].

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::marble::Color;
use crate::error::SetupError;

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    A,
    B,
}

impl Seat {
    /// Both seats, in order.
    pub const ALL: [Seat; 2] = [Seat::A, Seat::B];

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Seat {
        match self {
            Seat::A => Seat::B,
            Seat::B => Seat::A,
        }
    }

    /// 0-based index of this seat.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::A => 0,
            Seat::B => 1,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::A => write!(f, "Seat A"),
            Seat::B => write!(f, "Seat B"),
        }
    }
}

/// A player: a display name plus the color they push.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    color: Color,
}

impl Player {
    /// Create a player record. Name emptiness is checked when the
    /// roster is assembled, not here.
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    /// The player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The color this player owns.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }
}

/// Per-seat data storage.
///
/// ## Example
///
/// ```
/// use kuba_engine::{Seat, SeatMap};
///
/// let mut captures: SeatMap<u32> = SeatMap::default();
/// captures[Seat::A] += 1;
///
/// assert_eq!(captures[Seat::A], 1);
/// assert_eq!(captures[Seat::B], 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; 2],
}

impl<T> SeatMap<T> {
    /// Create a map with explicit per-seat values.
    #[must_use]
    pub fn new(a: T, b: T) -> Self {
        Self { data: [a, b] }
    }

    /// Iterate over `(Seat, &T)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::ALL
            .into_iter()
            .map(move |seat| (seat, &self.data[seat.index()]))
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        &self.data[seat.index()]
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        &mut self.data[seat.index()]
    }
}

/// The two players of one game, immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: SeatMap<Player>,
}

impl Roster {
    /// Assemble the roster, rejecting malformed setups: both seats
    /// must have a non-empty name, and the colors must differ.
    pub fn new(a: Player, b: Player) -> Result<Self, SetupError> {
        if a.name().is_empty() || b.name().is_empty() {
            return Err(SetupError::EmptyName);
        }
        if a.color() == b.color() {
            return Err(SetupError::DuplicateColor(a.color()));
        }
        Ok(Self {
            players: SeatMap::new(a, b),
        })
    }

    /// The player in `seat`.
    #[must_use]
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat]
    }

    /// The seat whose player is called `name`, if any.
    #[must_use]
    pub fn seat_of(&self, name: &str) -> Option<Seat> {
        Seat::ALL
            .into_iter()
            .find(|&seat| self.players[seat].name() == name)
    }

    /// The seat owning `color`.
    #[must_use]
    pub fn seat_of_color(&self, color: Color) -> Seat {
        if self.players[Seat::A].color() == color {
            Seat::A
        } else {
            Seat::B
        }
    }

    /// The color owned by the player in `seat`.
    #[must_use]
    pub fn color(&self, seat: Seat) -> Color {
        self.players[seat].color()
    }
}

impl Index<Seat> for Roster {
    type Output = Player;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.player(seat)
    }
}
