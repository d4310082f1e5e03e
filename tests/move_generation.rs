//! Move-generation counts (perft) and a handful of concrete move-list
//! scenarios: castling availability, promotions, and en-passant.

use pretty_assertions::assert_eq;
use tabiya::chess::position::Position;

#[test]
fn perft_from_starting_position() {
    let mut position = Position::starting();
    assert_eq!(position.perft(1), 20);
    assert_eq!(position.perft(2), 400);
    assert_eq!(position.perft(3), 8_902);
}

#[test]
fn perft_with_castling_and_en_passant_available() {
    // "Kiwipete": exercises castling, en-passant and promotions together.
    let mut position =
        Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
            .unwrap();
    assert_eq!(position.perft(1), 48);
}

#[test]
fn white_castling_moves_are_available_only_on_whites_turn() {
    let mut position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let moves: Vec<String> = position
        .legal_moves()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert!(moves.contains(&"e1g1".to_string()));
    assert!(moves.contains(&"e1c1".to_string()));
    assert!(!moves.contains(&"e8g8".to_string()));
}

#[test]
fn pawn_push_sets_en_passant_target() {
    let mut position = Position::starting();
    position.apply_long_algebraic("e2e4").unwrap();
    assert_eq!(position.to_string(), "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
}

#[test]
fn promotion_yields_four_moves() {
    let mut position = Position::from_fen("8/P7/8/8/8/8/8/k6K w - - 0 1").unwrap();
    let promotions: Vec<String> = position
        .legal_moves()
        .iter()
        .map(ToString::to_string)
        .filter(|mv| mv.starts_with("a7a8"))
        .collect();
    assert_eq!(promotions.len(), 4);
    for suffix in ["q", "r", "b", "n"] {
        assert!(promotions.contains(&format!("a7a8{suffix}")));
    }
}

#[test]
fn castling_is_blocked_by_an_attacked_transit_square() {
    // The rook on e8 eyes e1, so White's king cannot pass through e1... but
    // more pointedly here, f1 is attacked by the bishop on h3, blocking
    // kingside castling without affecting queenside.
    let mut position = Position::from_fen("4k3/8/8/8/8/7b/8/R3K2R w KQ - 0 1").unwrap();
    let moves: Vec<String> = position
        .legal_moves()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert!(!moves.contains(&"e1g1".to_string()));
    assert!(moves.contains(&"e1c1".to_string()));
}
