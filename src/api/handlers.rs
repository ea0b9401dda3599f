//! Route handlers.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, State},
    response::Html,
    Json,
};

use super::error::ApiError;
use super::form::render_form;
use super::models::{ChecksumResponse, TextRequest, TokensResponse, WelcomeResponse};

/// Immutable state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    participant: Arc<str>,
    form_page: Bytes,
}

impl AppState {
    pub fn new(participant: &str) -> Self {
        Self {
            participant: Arc::from(participant),
            form_page: Bytes::from(render_form(participant)),
        }
    }

    pub fn participant(&self) -> &str {
        &self.participant
    }
}

/// `GET /`
pub async fn welcome(State(state): State<AppState>) -> Json<WelcomeResponse> {
    Json(WelcomeResponse::for_participant(state.participant()))
}

/// `POST /checksum`
pub async fn checksum_text(
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> Result<Json<ChecksumResponse>, ApiError> {
    let Json(TextRequest { text }) = payload?;
    tracing::debug!(len = text.len(), "computing checksum");
    Ok(Json(ChecksumResponse::for_text(text)))
}

/// `POST /tokens`
pub async fn issue_tokens(
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> Result<Json<TokensResponse>, ApiError> {
    let Json(TextRequest { text }) = payload?;
    tracing::debug!(len = text.len(), "issuing tokens");
    Ok(Json(TokensResponse::for_text(&text)))
}

/// `GET /form`
pub async fn form_page(State(state): State<AppState>) -> Html<Bytes> {
    Html(state.form_page.clone())
}
