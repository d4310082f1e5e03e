//! [`Engine`]: the crate's public facade bundling a [`Position`] with the
//! operations an embedder needs -- loading a position, applying a move, and
//! picking the next one to play.

use std::fmt;

use crate::chess::core::Move;
use crate::chess::position::Position;
use crate::search::{self, Depth};

pub mod uci;

/// Errors surfaced at the engine's public boundary. Internally,
/// `chess::core`/`chess::position` keep using `anyhow::Result` (matching
/// the rest of the crate's parsing style); `Engine` wraps those into this
/// small, matchable enum so embedders are not forced to depend on
/// `anyhow`.
#[derive(Debug)]
pub enum EngineError {
    /// The string passed to [`Engine::load`] is not valid FEN.
    InvalidPosition(anyhow::Error),
    /// The string passed to [`Engine::apply_long_algebraic`] is not valid
    /// long algebraic notation.
    InvalidMove(anyhow::Error),
    /// The move was valid notation but is not legal in the current
    /// position.
    IllegalMove(anyhow::Error),
    /// `max_depth` passed to [`Engine::best_move`] was `0`.
    InvalidDepth,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidPosition(e) => write!(f, "invalid position: {e}"),
            Self::InvalidMove(e) => write!(f, "invalid move: {e}"),
            Self::IllegalMove(e) => write!(f, "illegal move: {e}"),
            Self::InvalidDepth => write!(f, "depth must be at least 1"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPosition(e) | Self::InvalidMove(e) | Self::IllegalMove(e) => {
                Some(e.as_ref())
            },
            Self::InvalidDepth => None,
        }
    }
}

/// The engine's public surface for embedding: a position plus the three
/// operations a front end (UCI, a GUI, a test harness) drives it through.
pub struct Engine {
    position: Position,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates a new engine at the starting position.
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Position::starting(),
        }
    }

    /// Replaces the current position with the one described by `fen`. On
    /// failure, the engine's current position is left untouched: the
    /// parse is staged and only committed once it fully succeeds.
    pub fn load(&mut self, fen: &str) -> Result<(), EngineError> {
        let position = Position::from_fen(fen).map_err(EngineError::InvalidPosition)?;
        self.position = position;
        Ok(())
    }

    /// Applies a move given in long algebraic notation (`e2e4`, `e7e8q`).
    /// Rejects moves that are not legal in the current position without
    /// mutating it -- a move that merely parses is not applied unless it
    /// is also legal.
    pub fn apply_long_algebraic(&mut self, mv: &str) -> Result<(), EngineError> {
        Move::from_long_algebraic(mv).map_err(EngineError::InvalidMove)?;
        self.position
            .apply_long_algebraic(mv)
            .map_err(EngineError::IllegalMove)
    }

    /// Searches the current position up to `max_depth` plies and returns
    /// the chosen move in long algebraic notation, or the null move
    /// (`"0000"`) if there are no legal moves.
    pub fn best_move(&mut self, max_depth: Depth) -> Result<String, EngineError> {
        if max_depth == 0 {
            return Err(EngineError::InvalidDepth);
        }
        Ok(match search::best_move(&mut self.position, max_depth) {
            Some(mv) => mv.to_string(),
            None => Move::null(),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::Engine;

    #[test]
    fn load_rejects_malformed_fen_without_mutating_position() {
        let mut engine = Engine::new();
        assert!(engine.load("not a fen").is_err());
        // The starting position is still there.
        assert_eq!(
            engine.best_move(1).unwrap().len() >= 4,
            true
        );
    }

    #[test]
    fn apply_and_search_round_trip() {
        let mut engine = Engine::new();
        engine.apply_long_algebraic("e2e4").unwrap();
        let mv = engine.best_move(1).unwrap();
        assert!(mv != "0000");
    }

    #[test]
    fn illegal_move_is_rejected() {
        let mut engine = Engine::new();
        assert!(engine.apply_long_algebraic("e2e5").is_err());
    }

    #[test]
    fn zero_depth_is_rejected() {
        let mut engine = Engine::new();
        assert!(matches!(engine.best_move(0), Err(super::EngineError::InvalidDepth)));
    }

    #[test]
    fn no_legal_moves_returns_null_move() {
        let mut engine = Engine::new();
        engine.load("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(engine.best_move(2).unwrap(), "0000");
    }
}
