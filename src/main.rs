//! Line-protocol front end: reads `position`/`go depth N`/`quit` from
//! stdin and writes `bestmove`/`info string` responses to stdout.

fn main() -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();
    tabiya::engine::uci::run(&mut input, &mut output)
}
