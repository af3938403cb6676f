//! Repeated wake/solve loop shared by the online and offline modes.

use anyhow::{Context, Result};
use labyrinth::core::scoreboard::Summary;
use labyrinth::exit_codes;
use labyrinth::navigator::{Explorer, Navigator, SolveOutcome, run_attempts};
use rand::Rng;
use tracing::{info, warn};

pub struct Report {
    pub outcomes: Vec<SolveOutcome>,
    /// As reported by the labyrinth's `done`.
    pub summary: Summary,
}

impl Report {
    pub fn unsolved(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| !matches!(outcome, SolveOutcome::Victory { .. }))
            .count()
    }

    pub fn exit_code(&self) -> i32 {
        if self.unsolved() == 0 {
            exit_codes::OK
        } else {
            exit_codes::UNSOLVED
        }
    }
}

/// Solve `times` labyrinths, then call `done`.
pub fn drive<R: Rng, E: Explorer>(
    navigator: &mut Navigator<R>,
    explorer: &mut E,
    times: u32,
) -> Result<Report> {
    let mut outcomes = Vec::new();
    let summary = run_attempts(navigator, explorer, times, |attempt, outcome| {
        match outcome {
            SolveOutcome::Victory { steps } => info!(attempt, steps, "treasure found"),
            SolveOutcome::Exhausted { moves } => warn!(attempt, moves, "no path to the treasure"),
            SolveOutcome::GaveUp { moves } => warn!(attempt, moves, "move budget exhausted"),
            SolveOutcome::NotStarted { error } => warn!(attempt, %error, "could not wake up"),
        }
        outcomes.push(outcome.clone());
    })
    .context("done request failed")?;

    let report = Report { outcomes, summary };
    info!(
        attempts = report.outcomes.len(),
        unsolved = report.unsolved(),
        "all attempts finished"
    );
    Ok(report)
}
