//! Server-side orchestration: one live session plus the scoreboard.
//!
//! `Game` answers the three protocol requests. The HTTP server wraps it in a
//! mutex; the offline solver drives it directly through [`LocalExplorer`].

use rand::Rng;
use tracing::{debug, error, info};

use crate::core::generator::{GenerateError, generate_maze};
use crate::core::invariants::validate_invariants;
use crate::core::scoreboard::{Scoreboard, Summary};
use crate::core::session::Session;
use crate::core::types::Direction;
use crate::io::config::MazeConfig;
use crate::navigator::{ExploreError, Explorer, Step};
use crate::protocol::{FailureReason, Reply, look_reply, move_reply};

pub struct Game<R> {
    maze: MazeConfig,
    rng: R,
    session: Option<Session>,
    scoreboard: Scoreboard,
}

impl<R: Rng> Game<R> {
    pub fn new(maze: MazeConfig, rng: R) -> Self {
        Self {
            maze,
            rng,
            session: None,
            scoreboard: Scoreboard::new(),
        }
    }

    /// Replace the session with a freshly generated maze and survey the start room.
    pub fn awake(&mut self) -> Result<Reply, GenerateError> {
        let (maze, algorithm) = generate_maze(
            self.maze.width,
            self.maze.height,
            self.maze.algorithm,
            &mut self.rng,
        )?;
        info!(
            %algorithm,
            width = self.maze.width,
            height = self.maze.height,
            start = %maze.start(),
            treasure = %maze.treasure(),
            "generated maze"
        );
        let violations = validate_invariants(&maze);
        if !violations.is_empty() {
            error!(
                %algorithm,
                violations = %violations.join("; "),
                "generated maze breaks invariants"
            );
        }
        if self.maze.print {
            println!("{maze}");
        }

        let session = self.session.insert(Session::new(maze));
        Ok(look_reply(session))
    }

    /// Handle `move/{token}`; victories are recorded on the scoreboard.
    pub fn move_token(&mut self, token: &str) -> Reply {
        match token.parse::<Direction>() {
            Ok(direction) => self.move_explorer(direction),
            Err(err) => {
                debug!(token, "rejected direction");
                Reply::from(err)
            }
        }
    }

    pub fn move_explorer(&mut self, direction: Direction) -> Reply {
        let Some(session) = self.session.as_mut() else {
            return Reply::failure(FailureReason::NotAwake, "call awake before moving");
        };
        let reply = move_reply(session, direction);
        if let Reply::Victory { steps } = reply {
            info!(steps, "victory");
            debug!("explorer on the treasure\n{}", session.render());
            self.scoreboard.record(steps);
        }
        reply
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn summary(&self) -> Summary {
        self.scoreboard.summary()
    }
}

/// In-process labyrinth for the offline solver and tests.
pub struct LocalExplorer<R> {
    game: Game<R>,
}

impl<R: Rng> LocalExplorer<R> {
    pub fn new(game: Game<R>) -> Self {
        Self { game }
    }

    pub fn game(&self) -> &Game<R> {
        &self.game
    }
}

impl<R: Rng> Explorer for LocalExplorer<R> {
    fn awake(&mut self) -> Result<Step, ExploreError> {
        self.game
            .awake()
            .map_err(|err| ExploreError::Transport(err.to_string()))?
            .into_step()
    }

    fn step(&mut self, direction: Direction) -> Result<Step, ExploreError> {
        self.game.move_explorer(direction).into_step()
    }

    fn done(&mut self) -> Result<Summary, ExploreError> {
        Ok(self.game.summary())
    }
}
