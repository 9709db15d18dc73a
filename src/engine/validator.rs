//! Move legality checks.
//!
//! Pure verdicts in a fixed order, each short-circuiting to illegal; no
//! check mutates anything. One rejection the executor would also surface
//! (pushing outward from the far edge, which can only eject the mover's
//! own marble) is left to the post-execution self-capture rollback; the
//! verdict and the visible state are identical either way.

use crate::core::{Coord, Direction};

use super::{GameEngine, GameStatus};

impl GameEngine {
    /// Whether `name` may push the marble at `from` along `direction`.
    ///
    /// Checks, in order: the game is still in progress; the inputs are
    /// well-formed (direction validity is carried by the enum itself);
    /// it is the caller's turn (before the first move, either player
    /// may open); the marble at `from` is the caller's own color; and the
    /// cell is free to push from, meaning it sits at the board edge
    /// opposite the push or has an empty cell directly behind it.
    #[must_use]
    pub fn is_legal(&self, name: &str, from: Coord, direction: Direction) -> bool {
        if self.status() != GameStatus::InProgress {
            return false;
        }

        if name.is_empty() || !from.in_bounds() {
            return false;
        }

        let seat = match self.roster().seat_of(name) {
            Some(seat) => seat,
            None => return false,
        };
        if self.current_seat().is_some_and(|turn| turn != seat) {
            return false;
        }

        if self.board().get(from) != Some(self.roster().color(seat).marble()) {
            return false;
        }

        match from.step(direction.opposite()) {
            // At the edge the push moves away from: always free.
            None => true,
            Some(behind) => self.board().get(behind).is_none(),
        }
    }
}
