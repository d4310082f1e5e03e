//! [Iterative deepening] search: repeatedly searches to increasing depth,
//! using [`alphabeta`] with [`ordering`]'s move ordering at each depth.
//!
//! [Iterative deepening]: https://www.chessprogramming.org/Iterative_Deepening

mod alphabeta;
mod ordering;

use crate::chess::core::Move;
use crate::chess::position::Position;

/// Search depth in plies.
pub type Depth = u8;

/// Searches `position` with iterative deepening up to `max_depth` plies and
/// returns the best move found, or `None` if the position has no legal
/// moves.
///
/// Deeper iterations only replace the incumbent best move on a strict
/// score improvement: the result is always the best move found by the
/// *last completed* iteration, not an artifact of whichever move happened
/// to be searched first at some depth.
#[must_use]
pub fn best_move(position: &mut Position, max_depth: Depth) -> Option<Move> {
    let white = position.side_to_move() == crate::chess::core::Player::White;
    let mut best: Option<(Move, i32)> = None;

    for depth in 1..=max_depth {
        let mut moves = position.legal_moves();
        if moves.is_empty() {
            break;
        }
        ordering::sort(position, &mut moves);

        for mv in moves {
            position.make_move(mv);
            let score = alphabeta::search(position, depth.saturating_sub(1), -1_000_000, 1_000_000);
            position.undo_move();

            best = match best {
                None => Some((mv, score)),
                Some((_, best_score)) => {
                    let improved = if white {
                        score > best_score
                    } else {
                        score < best_score
                    };
                    if improved {
                        Some((mv, score))
                    } else {
                        best
                    }
                },
            };
        }
    }

    best.map(|(mv, _)| mv)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::best_move;
    use crate::chess::position::Position;

    #[test]
    fn returns_a_legal_move() {
        let mut position = Position::starting();
        let legal = position.legal_moves();
        let mv = best_move(&mut position, 2).unwrap();
        assert!(legal.contains(&mv));
    }

    #[test]
    fn finds_back_rank_mate() {
        let mut position = Position::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
        let mv = best_move(&mut position, 2).unwrap();
        assert_eq!(mv.to_string(), "a1a8");
    }

    #[test]
    fn no_legal_moves_returns_none() {
        let mut position = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(best_move(&mut position, 3).is_none());
    }
}
