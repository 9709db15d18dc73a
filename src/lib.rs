//! # kuba-engine
//!
//! A rules engine for Kuba, a two-player marble game on a 7×7 board.
//!
//! ## Rules Summary
//!
//! Each player owns 8 marbles of one color (white or black); 13 neutral
//! red marbles start in a cross at the center. On a turn a player pushes
//! one of their own marbles, and every contiguous marble ahead of it,
//! one cell in a cardinal direction. Marbles pushed over the board edge
//! leave the game; a red marble leaving this way is captured by the
//! mover. First to capture 7 red marbles wins, as does a player whose
//! opponent has no marbles left on the board.
//!
//! Two moves are never accepted: a push that would eject the mover's own
//! marble, and a push that restores the board to the exact position that
//! existed just before the opponent's previous move.
//!
//! ## Design Principles
//!
//! 1. **Illegal is not exceptional**: [`GameEngine::make_move`] answers
//!    `false` for any illegal submission and guarantees the state is
//!    untouched. Only malformed setup is an error ([`SetupError`]).
//!
//! 2. **Snapshot, don't undo**: moves that turn out illegal after
//!    execution (self-capture, repetition) are reverted by restoring a
//!    pre-move board snapshot, never by incremental undo.
//!
//! 3. **Win state is a query**: the winner is recomputed from capture
//!    counters and board contents on demand; no cached flag can desync.
//!
//! ## Modules
//!
//! - `core`: marbles, coordinates, the board, the player roster
//! - `engine`: move validation, push execution, outcome evaluation
//! - `error`: setup-time error type

pub mod core;
pub mod engine;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Board, Color, Coord, Direction, Marble, MarbleCounts, Player, Roster, Seat, SeatMap,
    BOARD_SIZE,
};

pub use crate::engine::{GameEngine, GameStatus, MoveRecord, CAPTURE_TARGET};

pub use crate::error::SetupError;
