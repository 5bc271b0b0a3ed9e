//! Simulation Binary
//!
//! Pits the predictor against a scripted adversary and reports how often the
//! agent wins once it has had time to learn.
//!
//! Options: --pattern, --rounds, --seed
use clap::Parser;
use neuralhand::*;

#[derive(Parser)]
#[command(author, version, about = "Simulate rounds against a scripted adversary", long_about = None)]
struct Args {
    /// Adversary behaviour.
    #[arg(long, value_enum, default_value_t = Pattern::Cycle)]
    pattern: Pattern,
    /// Rounds to play.
    #[arg(long, default_value_t = 500)]
    rounds: usize,
    /// Seed for the predictor and the adversary.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() {
    log();
    let args = Args::parse();
    let mut predictor = Predictor::new(args.seed);
    let mut adversary = Adversary::new(args.pattern, args.seed);
    let mut tally = Tally::default();
    let mut diverged = 0;
    let mut losses = Vec::new();
    log::info!("simulating {} rounds against {}", args.rounds, adversary.pattern());
    for round in 1..=args.rounds {
        let agent = predictor.predict_counter_move();
        let actual = adversary.play();
        tally.record(actual.versus(&agent));
        let training = predictor.record_move_and_train(actual);
        match training {
            Training::Diverged { .. } => diverged += 1,
            Training::Applied { .. } => losses.extend(training.loss()),
            Training::Skipped => {}
        }
        if round % 100 == 0 {
            let mean = match losses.len() {
                0 => 0.,
                n => losses.drain(..).sum::<Probability>() / n as Probability,
            };
            log::info!(
                "round {:>6}  agent win rate {:>5.1}%  mean loss {:.4}  {}",
                round,
                100. * tally.agent_rate(),
                mean,
                predictor.confidence()
            );
        }
    }
    log::info!(
        "{} | ties {} | agent win rate {:.1}% | {} training steps ({} discarded)",
        tally,
        tally.ties(),
        100. * tally.agent_rate(),
        predictor.training_steps(),
        diverged
    );
}
