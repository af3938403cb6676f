//! Solver that finds the treasure from local wall surveys alone.
//!
//! The search is a randomized depth-first walk: at each room it tries the
//! open sides (except straight back) in shuffled order, and physically walks
//! back out of every branch that dead-ends. It keeps no map and no visited
//! set, so it always terminates on perfect mazes but can circle forever in
//! mazes with loops; `max_moves` bounds that.

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::scoreboard::Summary;
use crate::core::types::{Direction, Survey};
use crate::protocol::FailureReason;

/// Successful answer to `awake` or a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Moved { survey: Survey, steps: u32 },
    Victory { steps: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExploreError {
    /// The labyrinth refused the request.
    #[error("{reason}: {message}")]
    Rejected {
        reason: FailureReason,
        message: String,
    },
    /// The request never got a usable answer (network, decode, or server error).
    #[error("transport failure: {0}")]
    Transport(String),
}

/// The labyrinth as seen by the solver: one blocking request per call.
pub trait Explorer {
    /// Start a fresh attempt in a newly generated maze.
    fn awake(&mut self) -> Result<Step, ExploreError>;

    fn step(&mut self, direction: Direction) -> Result<Step, ExploreError>;

    /// Declare the attempt sequence finished and fetch the final report.
    fn done(&mut self) -> Result<Summary, ExploreError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    Victory { steps: u32 },
    /// Every branch dead-ended without reaching the treasure.
    Exhausted { moves: u64 },
    /// The move budget ran out.
    GaveUp { moves: u64 },
    /// `awake` failed, so nothing was explored.
    NotStarted { error: String },
}

/// One level of the search: how we got here and which sides are still untried.
struct Frame {
    arrival: Option<Direction>,
    remaining: Vec<Direction>,
}

pub struct Navigator<R> {
    rng: R,
    max_moves: Option<u64>,
}

impl<R: Rng> Navigator<R> {
    pub fn new(rng: R, max_moves: Option<u64>) -> Self {
        Self { rng, max_moves }
    }

    /// Candidate sides: open, minus the way back, in random order.
    fn frame(&mut self, survey: &Survey, arrival: Option<Direction>) -> Frame {
        let back = arrival.map(Direction::opposite);
        let mut remaining: Vec<Direction> = survey
            .open_sides()
            .into_iter()
            .filter(|side| Some(*side) != back)
            .collect();
        remaining.shuffle(&mut self.rng);
        Frame { arrival, remaining }
    }

    /// Search from the room described by `survey` until victory, exhaustion or the move budget.
    ///
    /// Runs on an explicit stack; each frame behaves like one level of the
    /// recursive search, including the backtracking move when it returns empty-handed.
    pub fn solve<E: Explorer>(&mut self, explorer: &mut E, survey: Survey) -> SolveOutcome {
        let mut moves = 0u64;
        let mut stack = vec![self.frame(&survey, None)];

        while let Some(frame) = stack.last_mut() {
            if self.max_moves.is_some_and(|limit| moves >= limit) {
                warn!(moves, "move budget exhausted, giving up");
                return SolveOutcome::GaveUp { moves };
            }

            let Some(direction) = frame.remaining.pop() else {
                let arrival = frame.arrival;
                stack.pop();
                let Some(arrival) = arrival else {
                    continue;
                };
                let back = arrival.opposite();
                moves += 1;
                match explorer.step(back) {
                    Ok(Step::Moved { .. }) => debug!(%back, "backtracked"),
                    Ok(Step::Victory { steps }) => return SolveOutcome::Victory { steps },
                    Err(err) => warn!(%back, error = %err, "backtrack failed"),
                }
                continue;
            };

            moves += 1;
            match explorer.step(direction) {
                Ok(Step::Victory { steps }) => {
                    info!(steps, moves, "treasure found");
                    return SolveOutcome::Victory { steps };
                }
                Ok(Step::Moved { survey, .. }) => {
                    let next = self.frame(&survey, Some(direction));
                    stack.push(next);
                }
                Err(err) => warn!(%direction, error = %err, "move failed"),
            }
        }

        debug!(moves, "search exhausted");
        SolveOutcome::Exhausted { moves }
    }

    /// Wake up in a fresh maze and solve it.
    pub fn attempt<E: Explorer>(&mut self, explorer: &mut E) -> SolveOutcome {
        match explorer.awake() {
            Ok(Step::Moved { survey, .. }) => self.solve(explorer, survey),
            Ok(Step::Victory { steps }) => SolveOutcome::Victory { steps },
            Err(err) => {
                warn!(error = %err, "awake failed");
                SolveOutcome::NotStarted {
                    error: err.to_string(),
                }
            }
        }
    }
}

/// Repeat wake/solve `times` times, then declare the sequence done.
///
/// `on_attempt` sees each outcome as it completes.
pub fn run_attempts<R, E, F>(
    navigator: &mut Navigator<R>,
    explorer: &mut E,
    times: u32,
    mut on_attempt: F,
) -> Result<Summary, ExploreError>
where
    R: Rng,
    E: Explorer,
    F: FnMut(u32, &SolveOutcome),
{
    info!(times, "solving");
    for attempt in 1..=times {
        let outcome = navigator.attempt(explorer);
        on_attempt(attempt, &outcome);
    }
    explorer.done()
}
