//! Material balance: the sum of standard piece values, White-positive.
//!
//! The king contributes no material value -- it can never be captured, so
//! giving it a centipawn value would only distort the balance once one side
//! is down to bare king.

use crate::chess::core::{Piece, PieceKind};
use crate::chess::position::Position;

/// Centipawn value of each piece kind. Matches [`PieceKind::value`] but is
/// kept here too as the term evaluation actually adds up, independent of
/// what move ordering uses the same numbers for.
#[must_use]
fn value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::King => 0,
        _ => kind.value(),
    }
}

/// Sums material for both sides and returns `white - black`, in
/// centipawns.
#[must_use]
pub fn evaluate(position: &Position) -> i32 {
    let mut balance = 0;
    for index in 0..128u8 {
        let Ok(square) = crate::chess::core::Square::try_from(index) else {
            continue;
        };
        let piece = position.at(square);
        if piece == Piece::Empty {
            continue;
        }
        let sign = match piece.player() {
            Some(crate::chess::core::Player::White) => 1,
            Some(crate::chess::core::Player::Black) => -1,
            None => continue,
        };
        balance += sign * value(piece.kind().expect("non-empty square has a kind"));
    }
    balance
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::evaluate;
    use crate::chess::position::Position;

    #[test]
    fn starting_position_is_balanced() {
        assert_eq!(evaluate(&Position::starting()), 0);
    }

    #[test]
    fn white_missing_a_knight() {
        let position =
            Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/R1BQKBNR w KQkq - 0 1").unwrap();
        assert_eq!(evaluate(&position), -320);
    }

    #[test]
    fn black_missing_a_queen() {
        let position =
            Position::from_fen("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
        assert_eq!(evaluate(&position), 900);
    }
}
