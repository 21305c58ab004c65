//! Wire types shared by the HTTP server and the terminal client.
//!
//! JSON shapes mirror the platform webview contract: every response
//! carries a `status` tag of `success` or `error`, with camelCase
//! payload fields.

use crate::games::wordle::{LetterState, WORD_LENGTH};
use serde::{Deserialize, Serialize};

/// Response for `GET /api/init`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum InitResponse {
    /// Session config exists (created lazily if needed).
    #[serde(rename_all = "camelCase")]
    Success {
        /// The post this session belongs to.
        post_id: String,
    },
    /// Initialization failed.
    Error {
        /// Human-readable failure description.
        message: String,
    },
}

/// Request body for `POST /api/check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRequest {
    /// The submitted guess. Missing or empty is a validation error.
    #[serde(default)]
    pub guess: Option<String>,
}

/// Response for `POST /api/check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CheckResponse {
    /// The guess was evaluated (or rejected as not a word).
    Success {
        /// Whether the guess is a recognized dictionary word.
        exists: bool,
        /// Whether the guess matched the secret word.
        solved: bool,
        /// Per-position classification; all `initial` when `exists` is false.
        correct: [LetterState; WORD_LENGTH],
    },
    /// Validation or configuration failure.
    Error {
        /// Human-readable failure description.
        message: String,
    },
}

/// Response for `GET /api/reveal`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RevealResponse {
    /// The session's secret word.
    Success {
        /// The secret word for the post.
        word: String,
    },
    /// Lookup failed.
    Error {
        /// Human-readable failure description.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::wordle::LetterState::{Absent, Correct, Initial, Present};

    #[test]
    fn test_init_response_json_shape() {
        let response = InitResponse::Success {
            post_id: "t3_abc".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"status":"success","postId":"t3_abc"}"#
        );
    }

    #[test]
    fn test_check_response_json_shape() {
        let response = CheckResponse::Success {
            exists: true,
            solved: false,
            correct: [Correct, Present, Absent, Absent, Initial],
        };
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"status":"success","exists":true,"solved":false,"correct":["correct","present","absent","absent","initial"]}"#
        );
    }

    #[test]
    fn test_error_shape_round_trips() {
        let raw = r#"{"status":"error","message":"Guess is required"}"#;
        let parsed: CheckResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(
            parsed,
            CheckResponse::Error {
                message: "Guess is required".to_string()
            }
        );
    }
}
