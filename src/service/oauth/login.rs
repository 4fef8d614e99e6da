use oauth2::{CsrfToken, Scope};
use url::Url;

use crate::service::oauth::DiscordAuthService;

impl DiscordAuthService<'_> {
    /// Builds the Discord authorization URL for a member.
    ///
    /// The Kajabi member id rides in the OAuth `state` parameter so the
    /// callback can re-associate the Discord account with the member record.
    pub fn login_url(&self, member_id: &str) -> Url {
        let state = CsrfToken::new(member_id.to_string());

        let (authorize_url, _state) = self
            .oauth_client
            .authorize_url(|| state)
            .add_scope(Scope::new("identify".to_string()))
            .add_scope(Scope::new("guilds.join".to_string()))
            .url();

        authorize_url
    }
}
