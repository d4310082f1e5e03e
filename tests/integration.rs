//! Drives the compiled binary's line protocol over stdin/stdout, the way a
//! GUI or tournament manager would.

use assert_cmd::Command;
use predicates::boolean::PredicateBooleanExt;
use predicates::str::contains;

const BINARY_NAME: &str = "tabiya";

#[test]
fn handshake() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("binary should be built");
    cmd.write_stdin("uci\nquit\n")
        .assert()
        .success()
        .stdout(contains("id name").and(contains("uciok")));
}

#[test]
fn plays_a_move_from_the_starting_position() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("binary should be built");
    cmd.write_stdin("position startpos\ngo depth 2\nquit\n")
        .assert()
        .success()
        .stdout(contains("bestmove"));
}

#[test]
fn plays_a_move_after_applying_moves_from_a_fen() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("binary should be built");
    cmd.write_stdin(
        "position fen rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 moves e2e4\ngo depth 1\nquit\n",
    )
    .assert()
    .success()
    .stdout(contains("bestmove"));
}
