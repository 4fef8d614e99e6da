//! Kajabi member record updates.

use crate::config::Config;

pub mod member;

pub struct KajabiService<'a> {
    pub http_client: &'a reqwest::Client,
    pub config: &'a Config,
}

impl<'a> KajabiService<'a> {
    pub fn new(http_client: &'a reqwest::Client, config: &'a Config) -> Self {
        Self {
            http_client,
            config,
        }
    }
}
