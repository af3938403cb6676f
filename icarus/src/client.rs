//! Blocking HTTP client for a running daedalus server.

use std::time::Duration;

use anyhow::{Context, Result};
use labyrinth::core::scoreboard::Summary;
use labyrinth::core::types::Direction;
use labyrinth::navigator::{ExploreError, Explorer, Step};
use labyrinth::protocol::Reply;
use reqwest::blocking::Client;
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct HttpExplorer {
    client: Client,
    base_url: String,
}

impl HttpExplorer {
    /// Client for the server on `127.0.0.1:{port}`.
    pub fn new(port: u16) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("build http client")?;
        Ok(Self {
            client,
            base_url: format!("http://127.0.0.1:{port}"),
        })
    }

    /// GET `path` and return the body whatever the status; refusals carry a JSON reply too.
    fn get(&self, path: &str) -> Result<String, ExploreError> {
        let url = format!("{}/{}", self.base_url, path);
        let response = self.client.get(&url).send().map_err(transport)?;
        let status = response.status();
        let body = response.text().map_err(transport)?;
        debug!(%url, %status, "response");
        Ok(body)
    }

    fn request(&self, path: &str) -> Result<Step, ExploreError> {
        decode_reply(&self.get(path)?)?.into_step()
    }
}

impl Explorer for HttpExplorer {
    fn awake(&mut self) -> Result<Step, ExploreError> {
        self.request("awake")
    }

    fn step(&mut self, direction: Direction) -> Result<Step, ExploreError> {
        self.request(&format!("move/{direction}"))
    }

    fn done(&mut self) -> Result<Summary, ExploreError> {
        let body = self.get("done")?;
        serde_json::from_str(&body)
            .map_err(|err| ExploreError::Transport(format!("unexpected summary {body:?}: {err}")))
    }
}

fn transport(err: reqwest::Error) -> ExploreError {
    ExploreError::Transport(err.to_string())
}

fn decode_reply(body: &str) -> Result<Reply, ExploreError> {
    serde_json::from_str(body)
        .map_err(|err| ExploreError::Transport(format!("unexpected reply {body:?}: {err}")))
}
