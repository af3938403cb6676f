//! Shared application state for the maze server.

use std::sync::{Arc, Mutex, PoisonError};

use labyrinth::core::scoreboard::Summary;
use labyrinth::game::Game;
use rand::rngs::StdRng;
use tokio::sync::Notify;

/// Shared state accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Live session, scoreboard and the process-wide random source.
    game: Arc<Mutex<Game<StdRng>>>,
    /// Signalled by `done` to stop the server.
    shutdown: Arc<Notify>,
}

impl AppState {
    pub fn new(game: Game<StdRng>) -> Self {
        Self {
            game: Arc::new(Mutex::new(game)),
            shutdown: Arc::new(Notify::new()),
        }
    }

    /// Run `f` with exclusive access to the game.
    ///
    /// A handler that panicked mid-request leaves the game usable; the
    /// session it was touching is simply replaced by the next `awake`.
    pub fn with_game<T>(&self, f: impl FnOnce(&mut Game<StdRng>) -> T) -> T {
        let mut game = self.game.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut game)
    }

    pub fn summary(&self) -> Summary {
        self.with_game(|game| game.summary())
    }

    pub fn request_shutdown(&self) {
        self.shutdown.notify_one();
    }

    /// Resolves once `request_shutdown` has been called (before or after).
    pub async fn shutdown_requested(&self) {
        self.shutdown.notified().await;
    }
}
