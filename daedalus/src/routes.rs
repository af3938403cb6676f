//! HTTP route handlers for the discovery protocol.

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use labyrinth::core::scoreboard::Summary;
use labyrinth::protocol::{FailureReason, Reply};
use tracing::{error, info};

use crate::state::AppState;

/// Build the protocol router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/awake", get(awake))
        .route("/move/{direction}", get(move_explorer))
        .route("/done", get(done))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

/// Malformed requests are 400; refusals by the game rules are 409.
fn status_for(reply: &Reply) -> StatusCode {
    match reply {
        Reply::Survey { .. } | Reply::Victory { .. } => StatusCode::OK,
        Reply::Failure {
            reason: FailureReason::InvalidDirection,
            ..
        } => StatusCode::BAD_REQUEST,
        Reply::Failure { .. } => StatusCode::CONFLICT,
    }
}

fn reply_response(reply: Reply) -> Response {
    (status_for(&reply), Json(reply)).into_response()
}

/// GET /awake - start a new session in a fresh maze.
async fn awake(State(state): State<AppState>) -> Response {
    match state.with_game(|game| game.awake()) {
        Ok(reply) => reply_response(reply),
        Err(err) => {
            error!(error = %err, "maze generation failed");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}

/// GET /move/{direction} - one step of the explorer.
async fn move_explorer(
    State(state): State<AppState>,
    Path(direction): Path<String>,
) -> Response {
    let reply = state.with_game(|game| game.move_token(&direction));
    reply_response(reply)
}

/// GET /done - report the scoreboard and stop the server.
async fn done(State(state): State<AppState>) -> Json<Summary> {
    let summary = state.summary();
    info!(
        attempts = summary.attempts,
        mean_steps = ?summary.mean_steps,
        "done requested"
    );
    state.request_shutdown();
    Json(summary)
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use labyrinth::core::generator::Algorithm;
    use labyrinth::core::types::Direction;
    use labyrinth::game::Game;
    use labyrinth::io::config::MazeConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tower::ServiceExt;

    use super::*;

    /// 2x1 binary-tree maze: one passage, start and treasure at either end.
    fn two_rooms() -> AppState {
        let config = MazeConfig {
            width: 2,
            height: 1,
            algorithm: Some(Algorithm::BinaryTree),
            print: false,
        };
        AppState::new(Game::new(config, StdRng::seed_from_u64(5)))
    }

    async fn get_raw(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request");
        let response = app.clone().oneshot(request).await.expect("response");
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        (status, body.to_vec())
    }

    async fn get_reply(app: &Router, uri: &str) -> (StatusCode, Reply) {
        let (status, body) = get_raw(app, uri).await;
        let reply = serde_json::from_slice(&body).expect("reply json");
        (status, reply)
    }

    #[tokio::test]
    async fn health_is_ok() {
        let app = router(two_rooms());
        let (status, body) = get_raw(&app, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"ok");
    }

    #[tokio::test]
    async fn move_before_awake_conflicts() {
        let app = router(two_rooms());
        let (status, reply) = get_reply(&app, "/move/up").await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(matches!(
            reply,
            Reply::Failure {
                reason: FailureReason::NotAwake,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn unknown_direction_is_a_bad_request() {
        let app = router(two_rooms());
        get_reply(&app, "/awake").await;
        let (status, reply) = get_reply(&app, "/move/diagonal").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(matches!(
            reply,
            Reply::Failure {
                reason: FailureReason::InvalidDirection,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn wall_blocked_move_conflicts() {
        let app = router(two_rooms());
        get_reply(&app, "/awake").await;
        let (status, reply) = get_reply(&app, "/move/up").await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(matches!(
            reply,
            Reply::Failure {
                reason: FailureReason::WallBlocked,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn victory_then_done_reports_and_shuts_down() {
        let state = two_rooms();
        let app = router(state.clone());

        let (status, reply) = get_reply(&app, "/awake").await;
        assert_eq!(status, StatusCode::OK);
        let Reply::Survey { survey, steps: 0 } = reply else {
            panic!("expected a fresh survey, got {reply:?}");
        };
        let open = survey.open_sides();
        assert_eq!(open.len(), 1);
        assert!(matches!(open[0], Direction::Left | Direction::Right));

        let uri = format!("/move/{}", open[0]);
        let (status, reply) = get_reply(&app, &uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(reply, Reply::Victory { steps: 1 });

        let (status, reply) = get_reply(&app, &format!("/move/{}", open[0].opposite())).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(matches!(
            reply,
            Reply::Failure {
                reason: FailureReason::AlreadyFinished,
                ..
            }
        ));

        let (status, body) = get_raw(&app, "/done").await;
        assert_eq!(status, StatusCode::OK);
        let summary: Summary = serde_json::from_slice(&body).expect("summary json");
        assert_eq!(summary.attempts, 1);
        assert_eq!(summary.mean_steps, Some(1.0));

        // `done` leaves a permit behind, so this resolves immediately.
        state.shutdown_requested().await;
        assert_eq!(
            state.summary().to_string(),
            "Labyrinth solved 1 times with an avg of 1.00 steps"
        );
    }
}
