//! Interactive Rock-Paper-Scissors against the online-learning agent.
//!
//! Options: --seed, --forget
use clap::Parser;
use neuralhand::*;

#[derive(Parser)]
#[command(author, version, about = "Play against an opponent that learns your patterns", long_about = None)]
struct Args {
    /// Seed both random sources for a reproducible session.
    #[arg(long)]
    seed: Option<u64>,
    /// Forget the learned model whenever the game is reset.
    #[arg(long)]
    forget: bool,
}

fn main() -> anyhow::Result<()> {
    log();
    let args = Args::parse();
    let predictor = args.seed.map(Predictor::new).unwrap_or_default();
    CLI::new(predictor, args.forget).run()
}
