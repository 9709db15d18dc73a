//! End-to-end scenarios driven through the public engine surface.
//!
//! Coordinates below refer to the canonical opening layout:
//!
//! ```text
//!        col 0 ----------- col 6
//! row 0:   W W . . . B B
//! row 1:   W W . R . B B
//! row 2:   . . R R R . .
//! row 3:   . R R R R R .
//! row 4:   . . R R R . .
//! row 5:   B B . R . W W
//! row 6:   B B . . . W W
//! ```

use kuba_engine::{Color, Coord, Direction, GameEngine, Marble, Player, Seat};

fn new_game() -> GameEngine {
    GameEngine::new(
        Player::new("ann", Color::White),
        Player::new("ben", Color::Black),
    )
    .expect("valid setup")
}

/// Apply a scripted sequence, asserting every move is accepted and the
/// shared invariants hold: strict turn alternation and a non-increasing
/// marble total.
fn play_all(game: &mut GameEngine, script: &[(&str, Coord, Direction)]) {
    for &(name, from, direction) in script {
        let total_before = game.marble_counts().total();

        assert!(
            game.make_move(name, from, direction),
            "move {} {} {} was rejected",
            name,
            from,
            direction
        );

        assert_eq!(game.current_turn(), game.opponent_of(name));
        assert!(game.marble_counts().total() <= total_before);
    }
}

// =============================================================================
// Opening Scenarios
// =============================================================================

/// Test the corner push: black at (6,0) shoves its column mate forward
/// into open space. No capture, and the turn passes.
#[test]
fn test_corner_push_forward() {
    let mut game = new_game();

    assert!(game.make_move("ben", Coord::new(6, 0), Direction::Forward));

    assert_eq!(game.marble_at(Coord::new(6, 0)), None);
    assert_eq!(game.marble_at(Coord::new(5, 0)), Some(Marble::Black));
    assert_eq!(game.marble_at(Coord::new(4, 0)), Some(Marble::Black));

    let counts = game.marble_counts();
    assert_eq!((counts.white, counts.black, counts.red), (8, 8, 13));
    assert_eq!(game.captured("ben"), Some(0));
    assert_eq!(game.current_turn(), Some("ann"));
}

/// Test that before the first move either player may open, and the
/// opener fixes the turn order.
#[test]
fn test_either_player_opens() {
    let mut game = new_game();
    assert_eq!(game.current_turn(), None);

    assert!(game.make_move("ann", Coord::new(0, 0), Direction::Backward));
    assert_eq!(game.current_turn(), Some("ben"));

    // A fresh game accepts ben first just as well.
    let mut game = new_game();
    assert!(game.make_move("ben", Coord::new(6, 0), Direction::Forward));
    assert_eq!(game.current_turn(), Some("ann"));
}

// =============================================================================
// Ejection
// =============================================================================

/// Test that pushing a packed column ejects the opponent marble at its
/// far end: the board loses exactly one marble and no capture counter
/// moves, since the ejected marble was not red.
#[test]
fn test_packed_column_ejects_opponent_marble() {
    let mut game = new_game();

    // Black walks its column-0 pair up toward white's corner block
    // while white does the mirror image in column 6.
    play_all(
        &mut game,
        &[
            ("ben", Coord::new(6, 0), Direction::Forward),
            ("ann", Coord::new(6, 6), Direction::Forward),
            ("ben", Coord::new(5, 0), Direction::Forward),
            ("ann", Coord::new(5, 6), Direction::Forward),
            ("ben", Coord::new(4, 0), Direction::Forward),
            ("ann", Coord::new(4, 6), Direction::Forward),
        ],
    );

    // Column 0 is now W W B B from the top; black's next shove packs
    // the lane and sends the white marble at (0,0) over the edge.
    let before = game.marble_counts();
    assert!(game.make_move("ben", Coord::new(3, 0), Direction::Forward));
    let after = game.marble_counts();

    assert_eq!(after.white, before.white - 1);
    assert_eq!(after.black, before.black);
    assert_eq!(after.red, before.red);
    assert_eq!(game.captured("ben"), Some(0));

    assert_eq!(game.marble_at(Coord::new(0, 0)), Some(Marble::White));
    assert_eq!(game.marble_at(Coord::new(1, 0)), Some(Marble::Black));
    assert_eq!(game.marble_at(Coord::new(2, 0)), Some(Marble::Black));
    assert_eq!(game.marble_at(Coord::new(3, 0)), None);

    let record = game.moves().last().expect("move was logged");
    assert_eq!(record.seat, Seat::B);
    assert_eq!(record.ejected, Some(Marble::White));
}

// =============================================================================
// Self-Capture
// =============================================================================

/// Test that a push ejecting the mover's own marble is rejected after
/// the fact and leaves the whole engine untouched.
#[test]
fn test_self_capture_rejected_without_trace() {
    let mut game = new_game();

    // Put a lone white marble on (2,0) with an empty cell behind a
    // leftward push.
    play_all(
        &mut game,
        &[
            ("ann", Coord::new(0, 0), Direction::Backward),
            ("ben", Coord::new(0, 6), Direction::Backward),
        ],
    );
    assert_eq!(game.marble_at(Coord::new(2, 0)), Some(Marble::White));

    // Pushing left from column 0 can only eject that same marble.
    let before = game.clone();
    assert!(!game.make_move("ann", Coord::new(2, 0), Direction::Left));

    assert_eq!(game, before);
    assert_eq!(game.current_turn(), Some("ann"));
    assert_eq!(game.moves().len(), 2);

    // The game goes on: ann still has legal moves.
    assert!(game.make_move("ann", Coord::new(2, 0), Direction::Forward));
}

// =============================================================================
// Repetition
// =============================================================================

/// Test that a move restoring the position the opponent faced before
/// their last move is rejected, while the same push is fine once the
/// surrounding position has changed.
#[test]
fn test_repetition_rule_rejects_undo() {
    let mut game = new_game();

    // A little row-0 shuffle brings white and black shoulder to
    // shoulder, then detours through quiet moves elsewhere so the
    // final exchange is the only candidate repetition.
    play_all(
        &mut game,
        &[
            ("ann", Coord::new(0, 0), Direction::Right),
            ("ben", Coord::new(0, 6), Direction::Left),
            ("ann", Coord::new(0, 1), Direction::Right),
            ("ben", Coord::new(0, 5), Direction::Left),
            ("ann", Coord::new(6, 6), Direction::Forward),
            ("ben", Coord::new(1, 6), Direction::Backward),
            ("ann", Coord::new(0, 1), Direction::Right),
        ],
    );

    // ben pushing (0,5) left would exactly restore the position that
    // stood before ann's last move.
    let before = game.clone();
    assert!(!game.make_move("ben", Coord::new(0, 5), Direction::Left));
    assert_eq!(game, before);
    assert_eq!(game.current_turn(), Some("ben"));

    // Any other legal reply is still accepted.
    assert!(game.make_move("ben", Coord::new(2, 6), Direction::Backward));
}

// =============================================================================
// Determinism
// =============================================================================

/// Test that replaying an identical script from an identical setup
/// reproduces the exact same engine state.
#[test]
fn test_deterministic_replay() {
    let script = [
        ("ben", Coord::new(6, 0), Direction::Forward),
        ("ann", Coord::new(6, 6), Direction::Forward),
        ("ben", Coord::new(5, 0), Direction::Forward),
        ("ann", Coord::new(5, 6), Direction::Forward),
        ("ben", Coord::new(4, 0), Direction::Forward),
        ("ann", Coord::new(4, 6), Direction::Forward),
        ("ben", Coord::new(3, 0), Direction::Forward),
    ];

    let mut first = new_game();
    let mut second = new_game();
    play_all(&mut first, &script);
    play_all(&mut second, &script);

    assert_eq!(first, second);
    assert_eq!(first.board().to_string(), second.board().to_string());
    assert_eq!(first.captured("ann"), second.captured("ann"));
    assert_eq!(first.captured("ben"), second.captured("ben"));
}

// =============================================================================
// Serialization
// =============================================================================

/// Test that a mid-game engine round-trips through serde unchanged.
#[test]
fn test_serde_round_trip() {
    let mut game = new_game();
    play_all(
        &mut game,
        &[
            ("ann", Coord::new(0, 0), Direction::Right),
            ("ben", Coord::new(0, 6), Direction::Left),
            ("ann", Coord::new(0, 1), Direction::Right),
        ],
    );

    let json = serde_json::to_string(&game).expect("serialize");
    let from_json: GameEngine = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(game, from_json);

    let bytes = bincode::serialize(&game).expect("encode");
    let from_bytes: GameEngine = bincode::deserialize(&bytes).expect("decode");
    assert_eq!(game, from_bytes);

    // The restored game is playable and agrees on whose turn it is.
    let mut restored = from_json;
    assert_eq!(restored.current_turn(), Some("ben"));
    assert!(restored.make_move("ben", Coord::new(0, 5), Direction::Left));
}
