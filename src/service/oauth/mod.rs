//! OAuth2 account linking with Discord.

use crate::{config::Config, state::OAuth2Client};

pub mod callback;
pub mod login;

pub struct DiscordAuthService<'a> {
    pub http_client: &'a reqwest::Client,
    pub oauth_client: &'a OAuth2Client,
    pub config: &'a Config,
}

impl<'a> DiscordAuthService<'a> {
    pub fn new(
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        config: &'a Config,
    ) -> Self {
        Self {
            http_client,
            oauth_client,
            config,
        }
    }
}
