//! Terminal entry point: one game per run.

use std::io;

use clap::Parser;

use rps_duel::{Console, GameRng, Roster, Session};

/// Rock, scissors, paper against a programmable rival.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Maximum number of turns in the match.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    turns: u32,

    /// Seed for the rival's randomness; OS entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    let mut session = Session::new(Roster::standard(), args.turns, rng);
    let verdict = session.run(&mut console);
    log::debug!("session ended: {:?}", verdict);

    // exit status stays 0 for wins, losses, draws and cancellation alike
}
