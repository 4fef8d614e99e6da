use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use oauth2::{basic::BasicRequestTokenError, HttpClientError};
use thiserror::Error;

use crate::{error::InternalServerError, model::api::ErrorDto};

/// Error returned by the oauth2 crate for a reqwest-backed code exchange.
pub type CodeExchangeError = BasicRequestTokenError<HttpClientError<reqwest::Error>>;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The initiation request did not carry a Kajabi member id in `state`.
    ///
    /// Results in a 400 Bad Request; no call is made to Discord.
    #[error("Missing state (member ID)")]
    MissingMemberId,

    /// The OAuth callback arrived without `code` or `state`.
    ///
    /// Results in a 400 Bad Request; the chain never starts.
    #[error("Missing code or state")]
    MissingCodeOrState,

    /// The token exchange failed: transport error, non-2xx answer, or a
    /// response body without a usable access token.
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchange(#[from] CodeExchangeError),

    /// Discord rejected the `users/@me` lookup.
    #[error("Discord identity lookup failed with status {status}")]
    IdentityLookup { status: u16 },

    /// The identity response parsed but carried no user id.
    #[error("Discord identity response did not include a user id")]
    MissingIdentity,

    /// Discord rejected the guild-member PUT.
    #[error("Discord guild join failed with status {status}")]
    GuildJoin { status: u16 },

    /// Kajabi rejected the member mutation. The user is already in the
    /// guild at this point; only the linkage record update failed.
    #[error("Kajabi member update failed with status {status}")]
    KajabiUpdate { status: u16 },
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingMemberId | Self::MissingCodeOrState => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}
