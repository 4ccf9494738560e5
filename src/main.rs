//! Command-line entry point for the blackjack trainer.

use std::io;
use std::process::ExitCode;

use bjtrainer::TrainerOptions;
use bjtrainer::cli::{report, run_session};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Practice basic-strategy decisions against a dealer up card.
#[derive(Debug, Parser)]
#[command(name = "bjtrainer", version, about)]
struct Args {
    /// Number of decks in the shoe (1-8). Prompted for when omitted.
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=8))]
    decks: Option<u8>,

    /// Seed for a reproducible shoe.
    #[arg(long)]
    seed: Option<u64>,

    /// Log debug details to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "bjtrainer=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut options = TrainerOptions::default().with_seed(args.seed);
    if let Some(decks) = args.decks {
        options = options.with_decks(decks);
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    let result = run_session(options, args.decks.is_none(), &mut input, &mut out);
    ExitCode::from(report(&result, &mut io::stderr()))
}
