//! HTTP surface: routes, handlers, bodies and error rendering.

mod error;
mod form;
mod handlers;
mod models;
mod router;

pub use error::ApiError;
pub use form::render_form;
pub use handlers::AppState;
pub use models::{ChecksumResponse, TextRequest, TokensResponse, WelcomeResponse};
pub use router::create_router;
