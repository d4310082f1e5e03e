//! [Alpha-beta pruning] over the explicit White-maximizes/Black-minimizes
//! form (rather than negamax): the sign convention matches
//! [`crate::evaluation`]'s White-positive scores directly, so no score
//! negation happens at the leaves or on the way back up.
//!
//! [Alpha-beta pruning]: https://en.wikipedia.org/wiki/Alpha%E2%80%93beta_pruning

use crate::chess::core::Player;
use crate::chess::position::Position;
use crate::evaluation;
use crate::search::ordering;

/// Score assigned to a checkmated side, offset from true infinity so that
/// shallower mates still compare as "more winning" than deeper ones if ever
/// compared directly.
pub(crate) const CHECKMATE: i32 = 100_000;
const INFINITY: i32 = 1_000_000;

/// Searches `depth` plies deep from `position`, returning the
/// White-positive score of optimal play by both sides.
pub(crate) fn search(position: &mut Position, depth: u8, mut alpha: i32, mut beta: i32) -> i32 {
    if depth == 0 {
        return evaluation::evaluate(position);
    }

    let mut moves = position.legal_moves();
    if moves.is_empty() {
        return if position.in_check() {
            if position.side_to_move() == Player::White {
                -CHECKMATE
            } else {
                CHECKMATE
            }
        } else {
            0
        };
    }
    ordering::sort(position, &mut moves);

    if position.side_to_move() == Player::White {
        let mut value = -INFINITY;
        for mv in moves {
            position.make_move(mv);
            let score = search(position, depth - 1, alpha, beta);
            position.undo_move();
            value = value.max(score);
            alpha = alpha.max(value);
            if alpha >= beta {
                break;
            }
        }
        value
    } else {
        let mut value = INFINITY;
        for mv in moves {
            position.make_move(mv);
            let score = search(position, depth - 1, alpha, beta);
            position.undo_move();
            value = value.min(score);
            beta = beta.min(value);
            if alpha >= beta {
                break;
            }
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{search, CHECKMATE, INFINITY};
    use crate::chess::position::Position;

    #[test]
    fn finds_mate_in_one_for_white() {
        // Ra1-a8 is a back-rank checkmate: the Black king is boxed in by
        // its own pawns.
        let mut position = Position::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
        let score = search(&mut position, 2, -INFINITY, INFINITY);
        assert_eq!(score, CHECKMATE);
    }

    #[test]
    fn recognizes_stalemate_as_a_draw() {
        let mut position = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        let score = search(&mut position, 1, -INFINITY, INFINITY);
        assert_eq!(score, 0);
    }
}
