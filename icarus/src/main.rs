//! Icarus - finds the treasure in daedalus labyrinths by feel alone.

mod client;
mod drive;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use labyrinth::core::generator::Algorithm;
use labyrinth::exit_codes;
use labyrinth::game::{Game, LocalExplorer};
use labyrinth::io::config::{ConfigOverrides, DEFAULT_CONFIG_PATH, load_config};
use labyrinth::logging;
use labyrinth::navigator::Navigator;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::client::HttpExplorer;
use crate::drive::drive;

#[derive(Parser)]
#[command(name = "icarus", version)]
#[command(about = "Solve labyrinths served by daedalus, one room at a time")]
struct Args {
    /// Path to the TOML config (missing file means defaults)
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Port of the daedalus server
    #[arg(long)]
    port: Option<u16>,

    /// Number of labyrinths to solve
    #[arg(long)]
    times: Option<u32>,

    #[arg(long)]
    seed: Option<u64>,

    /// Abandon an attempt after this many moves
    #[arg(long)]
    max_moves: Option<u64>,

    /// Generate and solve in-process instead of talking to a server
    #[arg(long)]
    offline: bool,

    /// Maze width (offline only)
    #[arg(long)]
    width: Option<usize>,

    /// Maze height (offline only)
    #[arg(long)]
    height: Option<usize>,

    /// Carving algorithm (offline only)
    #[arg(long)]
    algorithm: Option<Algorithm>,

    /// Draw every generated maze (offline only)
    #[arg(long)]
    print: bool,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            port: self.port,
            seed: self.seed,
            width: self.width,
            height: self.height,
            algorithm: self.algorithm,
            print: self.print,
            times: self.times,
            max_moves: self.max_moves,
        }
    }
}

fn main() {
    logging::init("icarus=info,labyrinth=warn");
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let args = Args::parse();
    let config = load_config(&args.config)?
        .apply(&args.overrides())
        .context("invalid configuration")?;
    let times = config.solver.times;

    let mut rng = config.rng();
    let mut navigator = Navigator::new(
        StdRng::from_rng(&mut rng).context("seed navigator")?,
        config.solver.max_moves,
    );

    let report = if args.offline {
        info!(times, "solving offline");
        let mut explorer = LocalExplorer::new(Game::new(config.maze.clone(), rng));
        drive(&mut navigator, &mut explorer, times)?
    } else {
        info!(times, port = config.port, "solving against daedalus");
        let mut explorer = HttpExplorer::new(config.port)?;
        drive(&mut navigator, &mut explorer, times)?
    };

    println!("{}", report.summary);
    Ok(report.exit_code())
}
