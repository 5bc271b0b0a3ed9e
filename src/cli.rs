//! Interactive terminal game against the predictor.
//!
//! Each round the predictor commits to its move before the user picks, the
//! round is resolved, and only then is the user's move revealed to the model.
use crate::*;
use colored::Colorize;
use dialoguer::Select;

/// Running score of one game, seen from the user's side.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub user: usize,
    pub agent: usize,
    pub rounds: usize,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        self.rounds += 1;
        match outcome {
            Outcome::Win => self.user += 1,
            Outcome::Loss => self.agent += 1,
            Outcome::Tie => {}
        }
    }
    pub fn ties(&self) -> usize {
        self.rounds - self.user - self.agent
    }
    /// Fraction of rounds the user won.
    pub fn user_rate(&self) -> Probability {
        self.rate(self.user)
    }
    /// Fraction of rounds the agent won.
    pub fn agent_rate(&self) -> Probability {
        self.rate(self.agent)
    }
    pub fn tie_rate(&self) -> Probability {
        self.rate(self.ties())
    }
    fn rate(&self, count: usize) -> Probability {
        match self.rounds {
            0 => 0.,
            n => count as Probability / n as Probability,
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "USER {}  ROUND {}  AGENT {}",
            self.user, self.rounds, self.agent
        )
    }
}

enum Choice {
    Play(Move),
    Reset,
    Quit,
}

const MENU: [&str; 5] = ["Rock", "Paper", "Scissors", "Reset game", "Quit"];

pub struct CLI {
    predictor: Predictor,
    tally: Tally,
    forget: bool,
}

impl CLI {
    /// With `forget`, resetting the game also resets the predictor;
    /// otherwise the agent keeps what it learned across games.
    pub fn new(predictor: Predictor, forget: bool) -> Self {
        Self {
            predictor,
            tally: Tally::default(),
            forget,
        }
    }
    pub fn tally(&self) -> Tally {
        self.tally
    }
    pub fn predictor(&self) -> &Predictor {
        &self.predictor
    }

    pub fn run(mut self) -> anyhow::Result<()> {
        log::info!("entering arena");
        loop {
            match self.choose()? {
                Choice::Quit => {
                    println!("{}", self.stats());
                    break;
                }
                Choice::Reset => self.reset(),
                Choice::Play(user) => {
                    self.round(user);
                }
            }
        }
        log::info!("leaving arena: {}", self.tally);
        Ok(())
    }

    /// Plays one round with the user's move and returns the user's outcome.
    pub fn round(&mut self, user: Move) -> Outcome {
        let prediction = self.predictor.predict();
        let outcome = user.versus(&prediction.counter);
        self.tally.record(outcome);
        let verdict = match outcome {
            Outcome::Win => outcome.to_string().green(),
            Outcome::Loss => outcome.to_string().red(),
            Outcome::Tie => outcome.to_string().yellow(),
        };
        println!(
            "{:<8} vs {:<8} {}",
            user.to_string(),
            prediction.counter.to_string(),
            verdict
        );
        println!("{}", self.confidence(&prediction));
        match self.predictor.record_move_and_train(user) {
            Training::Diverged { loss } => log::warn!("training step skipped (loss {})", loss),
            Training::Applied { loss } => log::debug!("trained (loss {:.4})", loss),
            Training::Skipped => {}
        }
        outcome
    }

    fn reset(&mut self) {
        println!("{}", self.stats());
        self.tally = Tally::default();
        if self.forget {
            self.predictor.reset();
        }
        println!("{}", "game reset".dimmed());
    }

    fn choose(&self) -> anyhow::Result<Choice> {
        let index = Select::new()
            .with_prompt(format!("{}", self.tally))
            .report(false)
            .items(&MENU)
            .default(0)
            .interact()?;
        match index {
            3 => Ok(Choice::Reset),
            4 => Ok(Choice::Quit),
            i => Move::try_from(i).map(Choice::Play),
        }
    }

    /// Win rates for this game and the user's move usage over every round
    /// the predictor has observed.
    fn stats(&self) -> String {
        let history = self.predictor.history();
        let usage = match history.len() {
            0 => "none yet".to_string(),
            n => Distribution::from(
                history
                    .frequencies()
                    .map(|count| count as Probability / n as Probability),
            )
            .to_string(),
        };
        format!(
            "{}  {}  {}\n{} {}",
            format!("USER {:.1}%", 100. * self.tally.user_rate()).green(),
            format!("AGENT {:.1}%", 100. * self.tally.agent_rate()).red(),
            format!("TIE {:.1}%", 100. * self.tally.tie_rate()).yellow(),
            "moves".dimmed(),
            usage
        )
    }

    fn confidence(&self, prediction: &Prediction) -> String {
        let source = match prediction.source {
            Source::Model => "model".cyan(),
            Source::Fallback => "random".dimmed(),
        };
        format!(
            "{} {} [{} rounds observed]",
            source,
            prediction.confidence,
            self.predictor.history_len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_counts_each_outcome() {
        let mut tally = Tally::default();
        for outcome in [Outcome::Win, Outcome::Loss, Outcome::Loss, Outcome::Tie] {
            tally.record(outcome);
        }
        assert_eq!(tally.user, 1);
        assert_eq!(tally.agent, 2);
        assert_eq!(tally.ties(), 1);
        assert_eq!(tally.rounds, 4);
        assert_eq!(tally.agent_rate(), 0.5);
        assert_eq!(tally.user_rate(), 0.25);
        assert_eq!(tally.tie_rate(), 0.25);
    }
    #[test]
    fn empty_tally_has_zero_rates() {
        let tally = Tally::default();
        assert_eq!(tally.user_rate(), 0.);
        assert_eq!(tally.agent_rate(), 0.);
        assert_eq!(tally.tie_rate(), 0.);
    }
    /// The readout reports the user's move usage across observed rounds.
    #[test]
    fn stats_show_move_usage() {
        let mut cli = CLI::new(Predictor::new(2), false);
        assert!(cli.stats().contains("none yet"));
        for m in [Move::Rock, Move::Rock, Move::Rock, Move::Paper] {
            let _ = cli.round(m);
        }
        let stats = cli.stats();
        assert!(stats.contains("Rock  75.0%"), "{}", stats);
        assert!(stats.contains("Paper  25.0%"), "{}", stats);
        assert!(stats.contains("Scissors   0.0%"), "{}", stats);
        assert!(stats.contains("USER") && stats.contains("AGENT") && stats.contains("TIE"));
    }
    /// Rounds feed the user's move to the predictor after scoring.
    #[test]
    fn round_records_user_move() {
        let mut cli = CLI::new(Predictor::new(0), false);
        for _ in 0..WINDOW_SIZE + 1 {
            let _ = cli.round(Move::Scissors);
        }
        assert_eq!(cli.tally().rounds, WINDOW_SIZE + 1);
        assert_eq!(cli.predictor().history_len(), WINDOW_SIZE + 1);
        assert!(cli.predictor().is_trained());
    }
    /// Resetting the game keeps the model unless asked to forget.
    #[test]
    fn reset_respects_forget() {
        let mut keep = CLI::new(Predictor::new(1), false);
        let mut forget = CLI::new(Predictor::new(1), true);
        for cli in [&mut keep, &mut forget] {
            for _ in 0..2 * WINDOW_SIZE {
                let _ = cli.round(Move::Rock);
            }
            cli.reset();
            assert_eq!(cli.tally(), Tally::default());
        }
        assert!(keep.predictor().is_trained());
        assert_eq!(keep.predictor().history_len(), 2 * WINDOW_SIZE);
        assert!(!forget.predictor().is_trained());
        assert_eq!(forget.predictor().history_len(), 0);
    }
}
