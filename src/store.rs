//! Per-post game configuration store.
//!
//! Stands in for the hosting platform's external key-value store: an
//! in-process map of raw JSON strings keyed `post_config:<postId>`.
//! Writes are plain sets; racing first-access creations are tolerated
//! and resolve last-writer-wins.

use crate::games::wordle::Word;
use crate::words;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument};

/// Stored configuration for one post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostConfig {
    /// The secret word for the post, fixed at creation.
    pub word_of_the_day: Word,
}

/// Errors from the config store.
#[derive(Debug, Display, Error)]
pub enum StoreError {
    /// No config stored under the key.
    #[display("post config not found for key {key}")]
    Missing {
        /// The store key that was looked up.
        key: String,
    },
    /// The answer list yielded no word.
    #[display("no word of the day found")]
    NoWord,
    /// Stored value failed to parse.
    #[display("malformed post config: {_0}")]
    Malformed(serde_json::Error),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err)
    }
}

/// Shared key-value store for post configs.
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

/// Store key for a post's config.
pub fn config_key(post_id: &str) -> String {
    format!("post_config:{post_id}")
}

impl ConfigStore {
    /// Creates an empty store.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating config store");
        Self::default()
    }

    /// Gets the config for a post, if present.
    #[instrument(skip(self))]
    pub fn maybe_get(&self, post_id: &str) -> Result<Option<PostConfig>, StoreError> {
        let key = config_key(post_id);
        let entries = self.entries.lock().unwrap();
        match entries.get(&key) {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => {
                debug!(key, "no config stored");
                Ok(None)
            }
        }
    }

    /// Gets the config for a post, erroring if absent.
    #[instrument(skip(self))]
    pub fn get(&self, post_id: &str) -> Result<PostConfig, StoreError> {
        self.maybe_get(post_id)?.ok_or_else(|| StoreError::Missing {
            key: config_key(post_id),
        })
    }

    /// Writes the config for a post. Last writer wins.
    #[instrument(skip(self, config))]
    pub fn set(&self, post_id: &str, config: &PostConfig) -> Result<(), StoreError> {
        let raw = serde_json::to_string(config)?;
        let mut entries = self.entries.lock().unwrap();
        entries.insert(config_key(post_id), raw);
        Ok(())
    }

    /// Creates a fresh config for a post with a newly chosen secret word.
    ///
    /// Not guarded against concurrent creators: two racing first
    /// requests may both choose a word, and the later write wins.
    #[instrument(skip(self))]
    pub fn create(&self, post_id: &str) -> Result<(), StoreError> {
        let word_of_the_day = words::word_of_the_day().ok_or(StoreError::NoWord)?;
        info!(post_id, "creating post config");
        self.set(post_id, &PostConfig { word_of_the_day })
    }
}

/// Convenience for tests and local play: create with a fixed word.
impl ConfigStore {
    /// Writes a config with the given secret word.
    #[instrument(skip(self))]
    pub fn create_with_word(&self, post_id: &str, word: Word) -> Result<(), StoreError> {
        self.set(
            post_id,
            &PostConfig {
                word_of_the_day: word,
            },
        )
    }
}
