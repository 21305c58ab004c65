//! HTTP client for the word-game API.

use crate::api::{CheckRequest, CheckResponse, InitResponse, RevealResponse};
use crate::games::wordle::Word;
use anyhow::{bail, Result};
use tracing::{debug, info, instrument};

/// Client for the three word-game endpoints.
///
/// Identity travels in the `x-post-id` and `x-user-id` headers, the
/// same contract the server's context extractor reads.
#[derive(Debug, Clone)]
pub struct GameClient {
    base_url: String,
    post_id: String,
    user_id: String,
    client: reqwest::Client,
}

impl GameClient {
    /// Creates a client for the given server and identity.
    pub fn new(base_url: String, post_id: String, user_id: String) -> Self {
        Self {
            base_url,
            post_id,
            user_id,
            client: reqwest::Client::new(),
        }
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .header("x-post-id", &self.post_id)
            .header("x-user-id", &self.user_id)
    }

    /// Initializes the session, creating the post config if absent.
    #[instrument(skip(self), fields(post_id = %self.post_id))]
    pub async fn init(&self) -> Result<String> {
        let response: InitResponse = self.get("/api/init").send().await?.json().await?;
        match response {
            InitResponse::Success { post_id } => {
                info!(post_id, "session initialized");
                Ok(post_id)
            }
            InitResponse::Error { message } => bail!("init failed: {message}"),
        }
    }

    /// Submits a guess for evaluation.
    ///
    /// Error-status responses come back as `CheckResponse::Error`; only
    /// transport failures surface as `Err`.
    #[instrument(skip(self), fields(post_id = %self.post_id))]
    pub async fn check(&self, guess: &Word) -> Result<CheckResponse> {
        debug!(%guess, "submitting guess");
        let response = self
            .client
            .post(format!("{}/api/check", self.base_url))
            .header("x-post-id", &self.post_id)
            .header("x-user-id", &self.user_id)
            .json(&CheckRequest {
                guess: Some(guess.to_string()),
            })
            .send()
            .await?
            .json()
            .await?;
        Ok(response)
    }

    /// Fetches the secret word for the game-over message.
    #[instrument(skip(self), fields(post_id = %self.post_id))]
    pub async fn reveal(&self) -> Result<RevealResponse> {
        let response = self.get("/api/reveal").send().await?.json().await?;
        Ok(response)
    }
}
