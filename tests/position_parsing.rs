//! FEN round-trip: `parse(serialize(position)) == position` on all four
//! required fields, across a handful of representative positions.

use pretty_assertions::assert_eq;
use tabiya::chess::position::Position;

fn roundtrips(fen: &str) {
    let position = Position::from_fen(fen).expect("fixture FEN is well-formed");
    let serialized = position.to_string();
    let reparsed = Position::from_fen(&serialized).expect("serialized FEN reparses");
    assert_eq!(reparsed.to_string(), serialized);
}

#[test]
fn starting_position() {
    roundtrips("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
}

#[test]
fn midgame_position_with_en_passant() {
    roundtrips("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3");
}

#[test]
fn position_with_partial_castling_rights() {
    roundtrips("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1");
}

#[test]
fn position_with_no_castling_rights() {
    roundtrips("8/8/8/8/8/8/8/4K2k w - - 0 1");
}

#[test]
fn trailing_halfmove_and_fullmove_fields_are_normalized() {
    let position = Position::from_fen("8/8/8/8/8/8/8/4K2k w - - 17 42").unwrap();
    assert_eq!(position.to_string(), "8/8/8/8/8/8/8/4K2k w - - 0 1");
}

#[test]
fn malformed_fen_is_rejected() {
    assert!(Position::from_fen("not a fen").is_err());
    assert!(Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR").is_err());
    assert!(Position::from_fen("9/8/8/8/8/8/8/8 w - -").is_err());
}
