use crate::error::{config::ConfigError, AppError};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";
const DISCORD_API_URL: &str = "https://discord.com/api";
const KAJABI_API_URL: &str = "https://app.kajabi.com/api/v1/graphql";

const DEFAULT_PORT: u16 = 3000;

pub struct Config {
    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_bot_token: String,
    pub discord_guild_id: String,

    /// Must match the redirect URI registered with the Discord application
    /// exactly; the same value is sent at authorization and token exchange.
    pub discord_redirect_url: String,
    pub discord_invite_url: String,

    pub kajabi_api_key: String,
    pub kajabi_api_url: String,

    pub port: u16,

    pub discord_auth_url: String,
    pub discord_token_url: String,
    pub discord_api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_client_id: require_env("DISCORD_CLIENT_ID")?,
            discord_client_secret: require_env("DISCORD_CLIENT_SECRET")?,
            discord_bot_token: require_env("DISCORD_BOT_TOKEN")?,
            discord_guild_id: require_env("DISCORD_GUILD_ID")?,
            discord_redirect_url: require_env("DISCORD_REDIRECT_URL")?,
            discord_invite_url: require_env("DISCORD_INVITE_URL")?,
            kajabi_api_key: require_env("KAJABI_API_KEY")?,
            kajabi_api_url: std::env::var("KAJABI_API_URL")
                .unwrap_or_else(|_| KAJABI_API_URL.to_string()),
            port: match std::env::var("PORT") {
                Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
                Err(_) => DEFAULT_PORT,
            },
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
            discord_api_url: DISCORD_API_URL.to_string(),
        })
    }
}

fn require_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

#[cfg(test)]
impl Config {
    /// Configuration with every upstream endpoint pointed at a mock server.
    pub(crate) fn for_mock_server(server: &httpmock::MockServer) -> Self {
        Self {
            discord_client_id: "test-client-id".to_string(),
            discord_client_secret: "test-client-secret".to_string(),
            discord_bot_token: "test-bot-token".to_string(),
            discord_guild_id: "424242".to_string(),
            discord_redirect_url: "http://localhost:3000/discord/callback".to_string(),
            discord_invite_url: "https://discord.gg/test-invite".to_string(),
            kajabi_api_key: "test-kajabi-key".to_string(),
            kajabi_api_url: server.url("/api/v1/graphql"),
            port: DEFAULT_PORT,
            discord_auth_url: server.url("/oauth2/authorize"),
            discord_token_url: server.url("/api/oauth2/token"),
            discord_api_url: server.url("/api"),
        }
    }
}
