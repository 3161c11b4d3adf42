//! HTTP API surface: request validation, error shaping, and route handlers.
//!
//! Handlers return typed response-description values; the axum transport
//! finalizes each response exactly once.

pub mod handler;
pub mod respond;
pub mod validate;

pub use handler::{method_not_allowed, url_to_image};
pub use respond::ErrorResponse;
pub use validate::require_params;

use serde::Serialize;

/// Successful screenshot payload: the rendered image inlined as a data URI.
#[derive(Debug, Serialize)]
pub struct FileBody {
    pub file: FileRef,
}

/// Reference to the produced file.
#[derive(Debug, Serialize)]
pub struct FileRef {
    /// `data:image/jpeg;base64,<payload>`
    pub url: String,
}
