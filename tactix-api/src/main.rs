//! Tac Tix Web API
//!
//! Serves the engine's reply to a game history:
//!
//! ```text
//! POST /        ["A1", "B23"]  ->  {"move": "C4", "status": "continue"}
//! GET  /health                 ->  {"status": "ok"}
//! ```
//!
//! The engine is built once at startup and shared read-only between requests.

mod config;

use std::env;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};

use tactix_solver::{Engine, Outcome, Selection};

use crate::config::Config;

type AppState = Arc<Engine>;

// =============================================================================
// JSON Models
// =============================================================================

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
struct BotResponse {
    #[serde(rename = "move")]
    mov: Option<String>,
    status: Outcome,
}

impl From<Selection> for BotResponse {
    fn from(selection: Selection) -> Self {
        BotResponse {
            mov: selection.mov,
            status: selection.outcome,
        }
    }
}

#[derive(Serialize)]
struct HealthModel {
    status: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct ErrorModel {
    detail: String,
}

// =============================================================================
// API Endpoints
// =============================================================================

async fn best_move(
    State(engine): State<AppState>,
    Json(history): Json<Vec<String>>,
) -> Result<Json<BotResponse>, (StatusCode, Json<ErrorModel>)> {
    debug!("history: {:?}", history);
    let selection = engine.select(&history).map_err(|e| {
        warn!("rejected history {:?}: {}", history, e);
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorModel {
                detail: e.to_string(),
            }),
        )
    })?;
    Ok(Json(selection.into()))
}

async fn health() -> Json<HealthModel> {
    Json(HealthModel {
        status: "ok".to_string(),
    })
}

fn app(engine: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", post(best_move))
        .route("/health", get(health))
        .layer(cors)
        .with_state(engine)
}

// =============================================================================
// Main
// =============================================================================

#[tokio::main]
async fn main() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let config = Config::load_or_default().with_port_override(env::var("PORT").ok());

    let engine = match Engine::new(config.engine.size) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("Failed to build engine: {}", e);
            std::process::exit(1);
        }
    };

    let address = config.bind_address();
    let listener = match tokio::net::TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(e) => {
            log::error!("Failed to bind {}: {}", address, e);
            std::process::exit(1);
        }
    };
    info!("Tac Tix API running on http://{}", address);

    if let Err(e) = axum::serve(listener, app(Arc::new(engine))).await {
        log::error!("Server error: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> AppState {
        Arc::new(Engine::new(2).unwrap())
    }

    fn history(moves: &[&str]) -> Json<Vec<String>> {
        Json(moves.iter().map(|m| m.to_string()).collect())
    }

    #[tokio::test]
    async fn test_best_move_win() {
        let Json(response) = best_move(State(engine()), history(&["A12", "B1"]))
            .await
            .unwrap();
        assert_eq!(
            response,
            BotResponse {
                mov: Some("B2".to_string()),
                status: Outcome::Win
            }
        );
    }

    #[tokio::test]
    async fn test_best_move_loss() {
        let Json(response) = best_move(State(engine()), history(&["A12", "B12"]))
            .await
            .unwrap();
        assert_eq!(response.mov, None);
        assert_eq!(response.status, Outcome::Loss);
    }

    #[tokio::test]
    async fn test_best_move_continue() {
        let Json(response) = best_move(State(engine()), history(&[])).await.unwrap();
        assert!(matches!(response.mov.as_deref(), Some("A1") | Some("A12")));
        assert_eq!(response.status, Outcome::Continue);
    }

    #[tokio::test]
    async fn test_malformed_history_is_bad_request() {
        let (status, Json(error)) = best_move(State(engine()), history(&["A1", "Z9"]))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(error.detail.contains("Z9"), "{}", error.detail);
    }

    #[test]
    fn test_response_json_shape() {
        let response = BotResponse {
            mov: None,
            status: Outcome::Loss,
        };
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"move":null,"status":"loss"}"#
        );
    }
}
