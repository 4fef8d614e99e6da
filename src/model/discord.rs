use serde::Deserialize;

/// The slice of Discord's `users/@me` response this service reads.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscordUser {
    /// Discord's unique snowflake id for the user.
    pub id: String,
    /// Username, only used for log lines.
    pub username: Option<String>,
}
