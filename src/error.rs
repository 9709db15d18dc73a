//! Setup-time errors.
//!
//! Illegal moves are not errors: [`crate::GameEngine::make_move`]
//! answers `false` and leaves the state untouched. The only fallible
//! operation is assembling a game from player records, since a malformed
//! game cannot be played at all.

use crate::core::Color;

/// Why a game could not be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("both players chose {0}; colors must be distinct")]
    DuplicateColor(Color),

    #[error("player names must be non-empty")]
    EmptyName,
}
