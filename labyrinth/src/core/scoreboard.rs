//! Append-only record of completed attempts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Steps taken by every solved attempt, in completion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scoreboard {
    scores: Vec<u32>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, steps: u32) {
        self.scores.push(steps);
    }

    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    pub fn attempts(&self) -> usize {
        self.scores.len()
    }

    /// Arithmetic mean of the recorded step counts; `None` before the first victory.
    pub fn mean_steps(&self) -> Option<f64> {
        if self.scores.is_empty() {
            return None;
        }
        let total: u64 = self.scores.iter().map(|steps| u64::from(*steps)).sum();
        Some(total as f64 / self.scores.len() as f64)
    }

    pub fn summary(&self) -> Summary {
        Summary {
            attempts: self.attempts(),
            mean_steps: self.mean_steps(),
        }
    }
}

/// Report sent in reply to `done` and printed on shutdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub attempts: usize,
    pub mean_steps: Option<f64>,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mean_steps {
            Some(mean) => write!(
                f,
                "Labyrinth solved {} times with an avg of {:.2} steps",
                self.attempts, mean
            ),
            None => write!(f, "Labyrinth solved {} times", self.attempts),
        }
    }
}
