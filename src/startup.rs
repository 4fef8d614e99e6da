use std::time::Duration;

use oauth2::basic::BasicClient;
use oauth2::{AuthType, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};

use crate::{
    config::Config,
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

/// Upper bound for any single outbound request, including the token exchange.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds the shared HTTP client used for all outbound API calls.
///
/// Redirects are disabled: token endpoints must answer directly, and the
/// oauth2 crate rejects clients that follow them.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    Ok(client)
}

/// Builds the OAuth2 client for the Discord authorization-code flow.
///
/// Client credentials are sent in the request body, matching what Discord's
/// token endpoint documents.
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let client = BasicClient::new(ClientId::new(config.discord_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
        .set_auth_uri(AuthUrl::new(config.discord_auth_url.clone()).map_err(ConfigError::from)?)
        .set_token_uri(TokenUrl::new(config.discord_token_url.clone()).map_err(ConfigError::from)?)
        .set_redirect_uri(
            RedirectUrl::new(config.discord_redirect_url.clone()).map_err(ConfigError::from)?,
        )
        .set_auth_type(AuthType::RequestBody);

    Ok(client)
}
