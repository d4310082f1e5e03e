//! A thin, deliberately incomplete [Universal Chess Interface] front end:
//! enough of the protocol to drive [`Engine`] from a GUI or tournament
//! manager's stdin/stdout pipe, without claiming full conformance. Option
//! negotiation, pondering and `searchmoves` are not implemented; corrupted
//! input is tolerated (unrecognized commands are ignored) rather than
//! rejected.
//!
//! [Universal Chess Interface]: https://www.chessprogramming.org/UCI

use std::io::{BufRead, Write};

use crate::engine::Engine;

/// A parsed line of UCI input. Unrecognized commands and options are
/// silently ignored rather than treated as protocol errors: GUIs send a lot
/// of commands this engine has no use for (`setoption`, `ucinewgame`,
/// `stop`), and the goal here is to not choke on them, not to implement
/// them.
enum Command {
    Uci,
    IsReady,
    Position { fen: Option<String>, moves: Vec<String> },
    Go { depth: u8 },
    Quit,
    Ignored,
}

impl Command {
    fn parse(line: &str) -> Self {
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.first().copied() {
            Some("uci") => Self::Uci,
            Some("isready") => Self::IsReady,
            Some("position") => parse_position(&parts),
            Some("go") => parse_go(&parts),
            Some("quit") => Self::Quit,
            _ => Self::Ignored,
        }
    }
}

fn parse_position(parts: &[&str]) -> Command {
    let moves_index = parts.iter().position(|&token| token == "moves");
    let fen = match parts.get(1) {
        Some(&"startpos") => None,
        Some(&"fen") => Some(parts[2..moves_index.unwrap_or(parts.len())].join(" ")),
        _ => None,
    };
    let moves = moves_index.map_or_else(Vec::new, |index| {
        parts[index + 1..].iter().map(ToString::to_string).collect()
    });
    Command::Position { fen, moves }
}

fn parse_go(parts: &[&str]) -> Command {
    let depth = parts
        .iter()
        .position(|&token| token == "depth")
        .and_then(|index| parts.get(index + 1))
        .and_then(|value| value.parse().ok())
        .unwrap_or(4);
    Command::Go { depth }
}

/// Reads UCI commands from `input` and writes responses to `out` until
/// `quit` is received or the input stream ends.
pub fn run<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> anyhow::Result<()> {
    let mut engine = Engine::new();
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        match Command::parse(&line) {
            Command::Uci => {
                writeln!(out, "id name {}", env!("CARGO_PKG_NAME"))?;
                writeln!(out, "id author {}", env!("CARGO_PKG_AUTHORS"))?;
                writeln!(out, "uciok")?;
            },
            Command::IsReady => writeln!(out, "readyok")?,
            Command::Position { fen, moves } => {
                match fen {
                    Some(fen) => {
                        if let Err(e) = engine.load(&fen) {
                            writeln!(out, "info string {e}")?;
                            continue;
                        }
                    },
                    None => engine = Engine::new(),
                }
                for mv in moves {
                    if let Err(e) = engine.apply_long_algebraic(&mv) {
                        writeln!(out, "info string {e}")?;
                        break;
                    }
                }
            },
            Command::Go { depth } => match engine.best_move(depth) {
                Ok(mv) => writeln!(out, "bestmove {mv}")?,
                Err(e) => writeln!(out, "info string {e}")?,
            },
            Command::Quit => break,
            Command::Ignored => {},
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::run;

    #[test]
    fn plays_a_move_from_the_starting_position() {
        let mut input = "position startpos\ngo depth 1\nquit\n".as_bytes();
        let mut out = Vec::new();
        run(&mut input, &mut out).unwrap();
        let response = String::from_utf8(out).unwrap();
        assert!(response.contains("bestmove"));
    }

    #[test]
    fn responds_to_handshake() {
        let mut input = "uci\nquit\n".as_bytes();
        let mut out = Vec::new();
        run(&mut input, &mut out).unwrap();
        let response = String::from_utf8(out).unwrap();
        assert!(response.contains("uciok"));
    }
}
