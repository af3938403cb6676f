//! Wire types for the discovery protocol (`awake`, `move/{direction}`, `done`).
//!
//! Every reply is exactly one of survey, victory or failure; the `outcome`
//! tag keeps victory from ever being mistaken for an error.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::session::{Look, MoveError, Session};
use crate::core::types::{Direction, ParseDirectionError, Survey};
use crate::navigator::{ExploreError, Step};

/// Why a request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    WallBlocked,
    OutOfBounds,
    AlreadyFinished,
    InvalidDirection,
    /// A move arrived before any `awake`.
    NotAwake,
}

impl FailureReason {
    pub const fn as_str(self) -> &'static str {
        match self {
            FailureReason::WallBlocked => "wall_blocked",
            FailureReason::OutOfBounds => "out_of_bounds",
            FailureReason::AlreadyFinished => "already_finished",
            FailureReason::InvalidDirection => "invalid_direction",
            FailureReason::NotAwake => "not_awake",
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&MoveError> for FailureReason {
    fn from(err: &MoveError) -> Self {
        match err {
            MoveError::WallBlocked(_) => FailureReason::WallBlocked,
            MoveError::OutOfBounds { .. } => FailureReason::OutOfBounds,
            MoveError::AlreadyFinished => FailureReason::AlreadyFinished,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Reply {
    Survey { survey: Survey, steps: u32 },
    Victory { steps: u32 },
    Failure { reason: FailureReason, message: String },
}

impl Reply {
    pub fn failure(reason: FailureReason, message: impl Into<String>) -> Self {
        Reply::Failure {
            reason,
            message: message.into(),
        }
    }

    /// Client-side view of a reply: failures become `ExploreError::Rejected`.
    pub fn into_step(self) -> Result<Step, ExploreError> {
        match self {
            Reply::Survey { survey, steps } => Ok(Step::Moved { survey, steps }),
            Reply::Victory { steps } => Ok(Step::Victory { steps }),
            Reply::Failure { reason, message } => Err(ExploreError::Rejected { reason, message }),
        }
    }
}

impl From<ParseDirectionError> for Reply {
    fn from(err: ParseDirectionError) -> Self {
        Reply::failure(FailureReason::InvalidDirection, err.to_string())
    }
}

/// Survey the explorer's room and wrap the result.
pub fn look_reply(session: &mut Session) -> Reply {
    let steps = session.steps_taken();
    match session.survey() {
        Look::Survey(survey) => Reply::Survey { survey, steps },
        Look::Victory => Reply::Victory { steps },
    }
}

/// Apply a move, then survey the destination.
pub fn move_reply(session: &mut Session, direction: Direction) -> Reply {
    match session.move_explorer(direction) {
        Ok(()) => look_reply(session),
        Err(err) => Reply::failure(FailureReason::from(&err), err.to_string()),
    }
}
