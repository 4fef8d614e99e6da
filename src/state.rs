//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. All fields are cheap to
//! clone: `reqwest::Client` wraps an `Arc` internally, the OAuth2 client is
//! designed to be cloned, and the configuration is reference-counted.

use std::sync::Arc;

use oauth2::basic::BasicClient;
use oauth2::{EndpointNotSet, EndpointSet};

use crate::config::Config;

/// OAuth2 client configured for Discord with the authorization and token
/// endpoints set.
pub type OAuth2Client =
    BasicClient<EndpointSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

#[derive(Clone)]
pub struct AppState {
    /// HTTP client for Discord and Kajabi API requests.
    ///
    /// Configured with redirects disabled and a bounded request timeout so
    /// no callback can hang on an unresponsive upstream.
    pub http_client: reqwest::Client,

    /// OAuth2 client driving the Discord authorization-code flow.
    pub oauth_client: OAuth2Client,

    /// Immutable application configuration loaded at startup.
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        config: Arc<Config>,
    ) -> Self {
        Self {
            http_client,
            oauth_client,
            config,
        }
    }
}
