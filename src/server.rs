//! HTTP API for the word-guessing game.
//!
//! Three endpoints over the platform-style request boundary:
//! `GET /api/init` lazily creates the per-post config, `POST /api/check`
//! evaluates a guess, and `GET /api/reveal` surfaces the secret word for
//! the game-over message. Request identity arrives in `x-post-id` and
//! `x-user-id` headers, standing in for the hosting platform's context
//! middleware.

use crate::api::{CheckRequest, CheckResponse, InitResponse, RevealResponse};
use crate::games::wordle::{evaluate, LetterState, Word, WORD_LENGTH};
use crate::store::{ConfigStore, StoreError};
use crate::words;
use axum::extract::{FromRequestParts, Json, State};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use derive_more::{Display, Error};
use std::convert::Infallible;
use tracing::{error, info, instrument, warn};

/// Shared server state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Per-post config store.
    pub store: ConfigStore,
}

impl AppState {
    /// Creates server state with a fresh store.
    pub fn new() -> Self {
        Self {
            store: ConfigStore::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Identity context injected per request from headers.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The post the request belongs to.
    pub post_id: Option<String>,
    /// The authenticated user.
    pub user_id: Option<String>,
}

impl<S: Send + Sync> FromRequestParts<S> for RequestContext {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = |name: &str| {
            parts
                .headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        };
        Ok(Self {
            post_id: header("x-post-id"),
            user_id: header("x-user-id"),
        })
    }
}

/// API failure surfaced as a structured JSON error response.
#[derive(Debug, Display, Error)]
pub enum ApiError {
    /// Request was malformed or missing identity.
    #[display("{message}")]
    BadRequest {
        /// Description returned to the caller.
        message: String,
    },
    /// Server-side configuration failure.
    #[display("{message}")]
    Internal {
        /// Description returned to the caller.
        message: String,
    },
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::Internal {
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => {
                error!(message = %self, "internal API error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = serde_json::json!({
            "status": "error",
            "message": self.to_string(),
        });
        (status, Json(body)).into_response()
    }
}

/// Builds the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/init", get(init))
        .route("/api/check", post(check))
        .route("/api/reveal", get(reveal))
        .with_state(state)
}

/// Binds and serves the API.
#[instrument(skip(state))]
pub async fn serve(host: &str, port: u16, state: AppState) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    info!(host, port, "word game API listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}

/// Lazily creates the per-post config and confirms the session.
#[instrument(skip(state))]
async fn init(
    State(state): State<AppState>,
    context: RequestContext,
) -> Result<Json<InitResponse>, ApiError> {
    let Some(post_id) = context.post_id else {
        warn!("init without post id in context");
        return Err(ApiError::bad_request(
            "postId is required but missing from context",
        ));
    };

    let config = state.store.maybe_get(&post_id)?;
    if config.is_none() {
        info!(post_id, "no config found, creating new one");
        state.store.create(&post_id)?;
        // Re-read rather than trusting our own write: a racing creator
        // may have won, and that word is the one in effect.
        state.store.get(&post_id)?;
    }

    Ok(Json(InitResponse::Success { post_id }))
}

/// Evaluates one guess against the post's secret word.
#[instrument(skip(state, request))]
async fn check(
    State(state): State<AppState>,
    context: RequestContext,
    Json(request): Json<CheckRequest>,
) -> Result<Json<CheckResponse>, ApiError> {
    let Some(post_id) = context.post_id else {
        return Err(ApiError::bad_request("postId is required"));
    };
    if context.user_id.is_none() {
        return Err(ApiError::bad_request("Must be logged in"));
    }
    let guess_text = match request.guess {
        Some(text) if !text.is_empty() => text,
        _ => return Err(ApiError::bad_request("Guess is required")),
    };

    let guess: Word = guess_text
        .parse()
        .map_err(|_| ApiError::bad_request("Guess must be 5 letters long"))?;

    let config = state.store.get(&post_id)?;

    if !words::is_allowed(&guess) {
        info!(post_id, %guess, "guess not in word list");
        return Ok(Json(CheckResponse::Success {
            exists: false,
            solved: false,
            correct: [LetterState::Initial; WORD_LENGTH],
        }));
    }

    let evaluation = evaluate(&config.word_of_the_day, &guess);
    info!(post_id, %guess, solved = evaluation.solved, "guess evaluated");

    Ok(Json(CheckResponse::Success {
        exists: true,
        solved: evaluation.solved,
        correct: evaluation.states,
    }))
}

/// Surfaces the secret word for the game-over message.
#[instrument(skip(state))]
async fn reveal(
    State(state): State<AppState>,
    context: RequestContext,
) -> Result<Json<RevealResponse>, ApiError> {
    let Some(post_id) = context.post_id else {
        return Err(ApiError::bad_request("postId is required"));
    };
    let config = state.store.get(&post_id)?;
    Ok(Json(RevealResponse::Success {
        word: config.word_of_the_day.to_string(),
    }))
}
