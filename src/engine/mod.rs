//! The game engine: all state and the move state machine.
//!
//! [`GameEngine`] owns the board, the roster, per-seat capture counters,
//! the turn marker, and the snapshot buffer behind the repetition rule.
//! A move submission flows through the validator, then the push
//! executor, then outcome evaluation, and either commits in full or
//! leaves no trace.
//!
//! ## Rejection after execution
//!
//! Two rules can only be judged on the resulting position: a push must
//! not eject the mover's own marble, and must not recreate the position
//! the opponent faced before their last move. Both are handled by
//! restoring the pre-move snapshot wholesale; at 49 cells a deep copy
//! is cheaper and safer than incremental undo.
//!
//! ## Win state
//!
//! [`GameEngine::status`] is a pure function of the capture counters and
//! the marbles on the board, recomputed per query. There is no stored
//! finished flag to fall out of sync.

mod history;
mod push;
mod validator;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{
    Board, Color, Coord, Direction, Marble, MarbleCounts, Player, Roster, Seat, SeatMap,
};
use crate::error::SetupError;
use history::History;

/// Red marbles a player must capture to win.
pub const CAPTURE_TARGET: u32 = 7;

/// Whether the game is still being played, and who won if not.
///
/// `Won` is terminal: once reached, every further move submission is
/// rejected and the status can never change back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(Seat),
}

/// One accepted move, as kept in the engine's append-only log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub seat: Seat,
    pub from: Coord,
    pub direction: Direction,
    /// The marble this push sent over the edge, if any. Red means the
    /// mover captured it; an opponent color means that marble simply
    /// left the game.
    pub ejected: Option<Marble>,
}

/// The rules engine for one game of Kuba.
///
/// ## Example
///
/// ```
/// use kuba_engine::{Color, Coord, Direction, GameEngine, Player};
///
/// let mut game = GameEngine::new(
///     Player::new("ann", Color::White),
///     Player::new("ben", Color::Black),
/// )?;
///
/// assert!(game.make_move("ann", Coord::new(0, 0), Direction::Backward));
/// assert_eq!(game.current_turn(), Some("ben"));
/// assert_eq!(game.winner(), None);
/// # Ok::<(), kuba_engine::SetupError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEngine {
    roster: Roster,
    board: Board,
    captures: SeatMap<u32>,
    turn: Option<Seat>,
    history: History,
    moves: Vector<MoveRecord>,
}

impl GameEngine {
    /// Start a game from the canonical opening layout.
    ///
    /// Fails if the two players share a color or a name is empty.
    pub fn new(a: Player, b: Player) -> Result<Self, SetupError> {
        Ok(Self {
            roster: Roster::new(a, b)?,
            board: Board::starting_layout(),
            captures: SeatMap::default(),
            turn: None,
            history: History::default(),
            moves: Vector::new(),
        })
    }

    // === Queries ===

    /// The two players.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The current board position.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The marble at `coord`, `None` for an empty or off-board cell.
    #[must_use]
    pub fn marble_at(&self, coord: Coord) -> Option<Marble> {
        if coord.in_bounds() {
            self.board.get(coord)
        } else {
            None
        }
    }

    /// Marbles currently on the board, tallied by kind.
    #[must_use]
    pub fn marble_counts(&self) -> MarbleCounts {
        self.board.marble_counts()
    }

    /// The seat that moves next; `None` before the first accepted move,
    /// when either player may open.
    #[must_use]
    pub fn current_seat(&self) -> Option<Seat> {
        self.turn
    }

    /// The name of the player who moves next, if the turn is set.
    #[must_use]
    pub fn current_turn(&self) -> Option<&str> {
        self.turn.map(|seat| self.roster[seat].name())
    }

    /// Red marbles captured by the named player, `None` for unknown
    /// names.
    #[must_use]
    pub fn captured(&self, name: &str) -> Option<u32> {
        self.roster.seat_of(name).map(|seat| self.captures[seat])
    }

    /// Red marbles captured by `seat`.
    #[must_use]
    pub fn captured_by(&self, seat: Seat) -> u32 {
        self.captures[seat]
    }

    /// The color the named player pushes, `None` for unknown names.
    #[must_use]
    pub fn color_of(&self, name: &str) -> Option<Color> {
        self.roster.seat_of(name).map(|seat| self.roster.color(seat))
    }

    /// The named player's opponent, `None` for unknown names.
    #[must_use]
    pub fn opponent_of(&self, name: &str) -> Option<&str> {
        self.roster
            .seat_of(name)
            .map(|seat| self.roster[seat.opponent()].name())
    }

    /// Every accepted move so far, in order.
    #[must_use]
    pub fn moves(&self) -> &Vector<MoveRecord> {
        &self.moves
    }

    /// Current game status, recomputed from counters and board contents.
    ///
    /// Capture wins take priority; otherwise a color with no marbles
    /// left hands the win to its opponent. A player is never declared
    /// winner for running out of marbles themselves.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        for seat in Seat::ALL {
            if self.captures[seat] >= CAPTURE_TARGET {
                return GameStatus::Won(seat);
            }
        }

        let counts = self.board.marble_counts();
        for color in [Color::White, Color::Black] {
            if counts.of_color(color) == 0 {
                return GameStatus::Won(self.roster.seat_of_color(color.opponent()));
            }
        }

        GameStatus::InProgress
    }

    /// The winning player's name, `None` while the game is in progress.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        match self.status() {
            GameStatus::Won(seat) => Some(self.roster[seat].name()),
            GameStatus::InProgress => None,
        }
    }

    // === Moves ===

    /// Submit a move: `name` pushes the marble at `from` along
    /// `direction`.
    ///
    /// Returns `true` iff the move was legal and applied. On `false` the
    /// game state is guaranteed unchanged, whatever the reason: bad
    /// input, out of turn, geometry, self-capture, or repetition.
    pub fn make_move(&mut self, name: &str, from: Coord, direction: Direction) -> bool {
        if !self.is_legal(name, from, direction) {
            return false;
        }
        let seat = match self.roster.seat_of(name) {
            Some(seat) => seat,
            None => return false,
        };

        let red_before = self.board.marble_counts().red;
        self.history.begin(self.board.clone());

        let ejected = push::push_line(&mut self.board, from, direction);

        // A push may not send the mover's own marble over the edge.
        if ejected == Some(self.roster.color(seat).marble()) {
            self.board = self.history.rollback();
            return false;
        }

        // Nor may it recreate the position the opponent faced before
        // their last move.
        if self.history.repeats_prior_position(&self.board) {
            self.board = self.history.rollback();
            return false;
        }
        self.history.commit();

        if self.board.marble_counts().red < red_before {
            self.captures[seat] += 1;
        }
        self.turn = Some(seat.opponent());
        self.moves.push_back(MoveRecord {
            seat,
            from,
            direction,
            ejected,
        });

        true
    }
}
