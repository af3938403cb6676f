//! Labyrinth configuration stored in `labyrinth.toml`.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::generator::Algorithm;

pub const DEFAULT_CONFIG_PATH: &str = "labyrinth.toml";

/// Shared configuration for the server and the solver (TOML).
///
/// Missing fields fall back to the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LabyrinthConfig {
    /// Port the server listens on and the solver connects to.
    pub port: u16,

    /// Seed for the process-wide random source; entropy when unset.
    pub seed: Option<u64>,

    pub maze: MazeConfig,

    pub solver: SolverConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MazeConfig {
    pub width: usize,
    pub height: usize,

    /// Pin one carving algorithm instead of the weighted random pick.
    pub algorithm: Option<Algorithm>,

    /// Draw every generated maze to stdout.
    pub print: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SolverConfig {
    /// Number of labyrinths to solve before calling `done`.
    pub times: u32,

    /// Abandon an attempt after this many move requests.
    pub max_moves: Option<u64>,
}

impl Default for LabyrinthConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            seed: None,
            maze: MazeConfig::default(),
            solver: SolverConfig::default(),
        }
    }
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: 15,
            height: 10,
            algorithm: None,
            print: false,
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            times: 10,
            max_moves: None,
        }
    }
}

impl LabyrinthConfig {
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(anyhow!("port must be > 0"));
        }
        if self.maze.width == 0 {
            return Err(anyhow!("maze.width must be > 0"));
        }
        if self.maze.height == 0 {
            return Err(anyhow!("maze.height must be > 0"));
        }
        if self.maze.width.saturating_mul(self.maze.height) < 2 {
            return Err(anyhow!(
                "maze must have at least two rooms (start and treasure)"
            ));
        }
        if self.solver.max_moves == Some(0) {
            return Err(anyhow!("solver.max_moves must be > 0 when set"));
        }
        Ok(())
    }

    /// Apply command-line overrides and re-validate.
    pub fn apply(mut self, overrides: &ConfigOverrides) -> Result<Self> {
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(seed) = overrides.seed {
            self.seed = Some(seed);
        }
        if let Some(width) = overrides.width {
            self.maze.width = width;
        }
        if let Some(height) = overrides.height {
            self.maze.height = height;
        }
        if let Some(algorithm) = overrides.algorithm {
            self.maze.algorithm = Some(algorithm);
        }
        if overrides.print {
            self.maze.print = true;
        }
        if let Some(times) = overrides.times {
            self.solver.times = times;
        }
        if let Some(max_moves) = overrides.max_moves {
            self.solver.max_moves = Some(max_moves);
        }
        self.validate()?;
        Ok(self)
    }

    /// The process-wide random source.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Values given on the command line; `None` keeps the file's value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub port: Option<u16>,
    pub seed: Option<u64>,
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub algorithm: Option<Algorithm>,
    pub print: bool,
    pub times: Option<u32>,
    pub max_moves: Option<u64>,
}

/// Read `path` and validate it; an absent file yields the defaults.
pub fn load_config(path: &Path) -> Result<LabyrinthConfig> {
    let cfg = match fs::read_to_string(path) {
        Ok(contents) => toml::from_str::<LabyrinthConfig>(&contents)
            .with_context(|| format!("parse {}", path.display()))?,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file, using defaults");
            LabyrinthConfig::default()
        }
        Err(err) => return Err(err).with_context(|| format!("read {}", path.display())),
    };
    cfg.validate()?;
    Ok(cfg)
}
