//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type wrapping the domain-specific
//! errors and implementing `IntoResponse` so handlers can bubble failures
//! with `?`. Client-input errors keep their short diagnostic message; every
//! other failure is logged server-side and answered with a generic 500 so
//! upstream error bodies are never echoed to the caller.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{auth::AuthError, config::ConfigError},
    model::api::ErrorDto,
};

#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Failure in the OAuth2 link flow.
    ///
    /// Delegates to `AuthError::into_response()` for per-variant status
    /// mapping (400 for client input errors, 500 for upstream failures).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// HTTP client request error from reqwest, including timeouts.
    ///
    /// Results in 500 Internal Server Error when external API calls fail.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// Logs the full error message for diagnostics but returns a generic body to
/// the client to avoid leaking upstream details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
