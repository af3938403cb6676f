//! Daedalus - maze server that generates labyrinths and answers exploration requests.

mod routes;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use labyrinth::core::generator::Algorithm;
use labyrinth::game::Game;
use labyrinth::io::config::{ConfigOverrides, DEFAULT_CONFIG_PATH, load_config};
use labyrinth::logging;
use tracing::{info, warn};

use crate::state::AppState;

#[derive(Parser)]
#[command(name = "daedalus")]
#[command(about = "Generate labyrinths and serve them one room at a time")]
struct Args {
    /// Path to the TOML config (missing file means defaults)
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to listen on
    #[arg(long)]
    port: Option<u16>,

    #[arg(long)]
    width: Option<usize>,

    #[arg(long)]
    height: Option<usize>,

    /// Seed for reproducible mazes
    #[arg(long)]
    seed: Option<u64>,

    /// Always carve with this algorithm (binary_tree_with_holes, binary_tree, growing_tree)
    #[arg(long)]
    algorithm: Option<Algorithm>,

    /// Draw every generated maze to stdout
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
            ..ConfigOverrides::default()
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init("daedalus=info,labyrinth=info");

    let args = Args::parse();
    let config = load_config(&args.config)?
        .apply(&args.overrides())
        .context("invalid configuration")?;
    info!(
        width = config.maze.width,
        height = config.maze.height,
        algorithm = ?config.maze.algorithm,
        seed = ?config.seed,
        "starting daedalus"
    );

    let state = AppState::new(Game::new(config.maze.clone(), config.rng()));
    let app = routes::router(state.clone());

    let addr: SocketAddr = format!("{}:{}", args.bind, config.port)
        .parse()
        .with_context(|| format!("parse bind address {}:{}", args.bind, config.port))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    info!(addr = %addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state.clone()))
        .await
        .context("serve")?;

    println!("{}", state.summary());
    Ok(())
}

/// Resolves on `done` or Ctrl-C.
async fn shutdown_signal(state: AppState) {
    let interrupted = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "cannot listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        () = state.shutdown_requested() => info!("done received, shutting down"),
        () = interrupted => info!("interrupted, shutting down"),
    }
}
