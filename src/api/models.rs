//! Request and response bodies.

use serde::{Deserialize, Serialize};

use crate::checksum::checksum;
use crate::tokens::{generate_tokens, TOKEN_COUNT};

/// Body accepted by `/checksum` and `/tokens`: `{"text": "..."}`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct TextRequest {
    pub text: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct WelcomeResponse {
    pub message: String,
}

impl WelcomeResponse {
    pub fn for_participant(participant: &str) -> Self {
        Self {
            message: format!("Welcome to the checksum token service, built for {participant}"),
        }
    }
}

/// Response of `/checksum`. Echoes the submitted text.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ChecksumResponse {
    pub text: String,
    pub checksum: String,
}

impl ChecksumResponse {
    pub fn for_text(text: String) -> Self {
        let checksum = checksum(&text);
        Self { text, checksum }
    }
}

/// Response of `/tokens`.
///
/// The tokens are drawn independently of `text`; only `checksum` depends on
/// it.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct TokensResponse {
    pub tokens: Vec<String>,
    pub checksum: String,
}

impl TokensResponse {
    pub fn for_text(text: &str) -> Self {
        Self {
            tokens: generate_tokens(TOKEN_COUNT),
            checksum: checksum(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TOKEN_LEN;

    #[test]
    fn test_tokens_response_shape() {
        let response = TokensResponse::for_text("hello");
        assert_eq!(response.tokens.len(), TOKEN_COUNT);
        assert!(response.tokens.iter().all(|t| t.len() == TOKEN_LEN));
        assert_eq!(response.checksum, checksum("hello"));
    }

    #[test]
    fn test_tokens_response_repeats_checksum_not_tokens() {
        let first = TokensResponse::for_text("same input");
        let second = TokensResponse::for_text("same input");
        assert_eq!(first.checksum, second.checksum);
        assert_ne!(first.tokens, second.tokens);
    }

    #[test]
    fn test_checksum_response_echoes_text() {
        let response = ChecksumResponse::for_text("hello".to_string());
        assert_eq!(response.text, "hello");
        assert_eq!(response.checksum, "5d41402abc4b2a76b9719d911017c592");
    }

    #[test]
    fn test_text_request_rejects_non_string() {
        assert!(serde_json::from_str::<TextRequest>(r#"{"text": 42}"#).is_err());
        assert!(serde_json::from_str::<TextRequest>(r#"{}"#).is_err());
        let ok: TextRequest = serde_json::from_str(r#"{"text": ""}"#).unwrap();
        assert_eq!(ok.text, "");
    }

    #[test]
    fn test_welcome_names_participant() {
        let welcome = WelcomeResponse::for_participant("Mark");
        assert!(welcome.message.starts_with("Welcome"));
        assert!(welcome.message.ends_with("Mark"));
    }
}
