use oauth2::{
    basic::BasicTokenType, AuthorizationCode, EmptyExtraTokenFields, StandardTokenResponse,
    TokenResponse,
};

use crate::{
    error::{auth::AuthError, AppError},
    model::discord::DiscordUser,
    service::oauth::DiscordAuthService,
};

type DiscordTokenResponse = StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>;

impl DiscordAuthService<'_> {
    /// Runs the Discord side of the link flow for a callback request.
    ///
    /// Exchanges the authorization code for an access token, resolves the
    /// authenticated user, and adds them to the configured guild. Each step
    /// consumes the previous step's output, so a failure stops the chain
    /// before any later call is issued.
    pub async fn callback(&self, authorization_code: String) -> Result<DiscordUser, AppError> {
        let auth_code = AuthorizationCode::new(authorization_code);

        let token = self
            .oauth_client
            .exchange_code(auth_code)
            .request_async(self.http_client)
            .await
            .map_err(AuthError::from)?;

        let user = self.fetch_discord_user(&token).await?;
        self.join_guild(&user, &token).await?;

        Ok(user)
    }

    /// Retrieves the authenticated Discord user with the access token.
    async fn fetch_discord_user(
        &self,
        token: &DiscordTokenResponse,
    ) -> Result<DiscordUser, AppError> {
        let access_token = token.access_token().secret();

        let response = self
            .http_client
            .get(format!("{}/users/@me", self.config.discord_api_url))
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AuthError::IdentityLookup {
                status: response.status().as_u16(),
            }
            .into());
        }

        let user = response.json::<DiscordUser>().await?;
        if user.id.is_empty() {
            return Err(AuthError::MissingIdentity.into());
        }

        tracing::info!(
            "Resolved Discord user {} ({})",
            user.id,
            user.username.as_deref().unwrap_or("unknown")
        );

        Ok(user)
    }

    /// Adds the user to the configured guild, authorized by the bot token.
    ///
    /// The user's access token goes in the request body so Discord can
    /// verify consent. Discord answers 201 when the user was added and 204
    /// when they were already a member; both count as success.
    async fn join_guild(
        &self,
        user: &DiscordUser,
        token: &DiscordTokenResponse,
    ) -> Result<(), AppError> {
        let response = self
            .http_client
            .put(format!(
                "{}/guilds/{}/members/{}",
                self.config.discord_api_url, self.config.discord_guild_id, user.id
            ))
            .header(
                "Authorization",
                format!("Bot {}", self.config.discord_bot_token),
            )
            .json(&serde_json::json!({ "access_token": token.access_token().secret() }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AuthError::GuildJoin {
                status: response.status().as_u16(),
            }
            .into());
        }

        tracing::info!(
            "Added Discord user {} to guild {}",
            user.id,
            self.config.discord_guild_id
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;

    use crate::{
        config::Config,
        error::{auth::AuthError, AppError},
        service::oauth::DiscordAuthService,
        startup,
    };

    /// Tests the full Discord-side chain against mocked endpoints.
    ///
    /// Expected: Ok(DiscordUser) with every endpoint hit exactly once.
    #[tokio::test]
    async fn test_callback_runs_exchange_lookup_and_join() {
        let server = MockServer::start_async().await;
        let config = Config::for_mock_server(&server);

        let token_mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/oauth2/token")
                    .header("content-type", "application/x-www-form-urlencoded");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(serde_json::json!({
                        "access_token": "tok1",
                        "token_type": "bearer",
                        "expires_in": 604800,
                    }));
            })
            .await;
        let user_mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/users/@me")
                    .header("authorization", "Bearer tok1");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(serde_json::json!({ "id": "999", "username": "tester" }));
            })
            .await;
        let join_mock = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path("/api/guilds/424242/members/999")
                    .header("authorization", "Bot test-bot-token")
                    .json_body(serde_json::json!({ "access_token": "tok1" }));
                then.status(201);
            })
            .await;

        let http_client = startup::setup_reqwest_client().unwrap();
        let oauth_client = startup::setup_oauth_client(&config).unwrap();
        let service = DiscordAuthService::new(&http_client, &oauth_client, &config);

        let user = service.callback("abc".to_string()).await.unwrap();

        assert_eq!(user.id, "999");
        token_mock.assert_async().await;
        user_mock.assert_async().await;
        join_mock.assert_async().await;
    }

    /// Tests that a rejected token exchange stops the chain.
    ///
    /// Expected: Err(TokenExchange), identity endpoint never called.
    #[tokio::test]
    async fn test_callback_halts_when_token_exchange_rejected() {
        let server = MockServer::start_async().await;
        let config = Config::for_mock_server(&server);

        let token_mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/oauth2/token");
                then.status(401)
                    .header("content-type", "application/json")
                    .json_body(serde_json::json!({ "error": "invalid_client" }));
            })
            .await;
        let user_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/users/@me");
                then.status(200);
            })
            .await;

        let http_client = startup::setup_reqwest_client().unwrap();
        let oauth_client = startup::setup_oauth_client(&config).unwrap();
        let service = DiscordAuthService::new(&http_client, &oauth_client, &config);

        let err = service.callback("abc".to_string()).await.unwrap_err();

        assert!(matches!(
            err,
            AppError::AuthErr(AuthError::TokenExchange(_))
        ));
        token_mock.assert_async().await;
        assert_eq!(user_mock.hits_async().await, 0);
    }

    /// Tests that a 200 token response without an access token halts the
    /// chain before the identity lookup.
    ///
    /// Expected: Err(TokenExchange), identity endpoint never called.
    #[tokio::test]
    async fn test_callback_halts_on_token_body_without_access_token() {
        let server = MockServer::start_async().await;
        let config = Config::for_mock_server(&server);

        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/oauth2/token");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(serde_json::json!({ "token_type": "bearer" }));
            })
            .await;
        let user_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/users/@me");
                then.status(200);
            })
            .await;

        let http_client = startup::setup_reqwest_client().unwrap();
        let oauth_client = startup::setup_oauth_client(&config).unwrap();
        let service = DiscordAuthService::new(&http_client, &oauth_client, &config);

        let err = service.callback("abc".to_string()).await.unwrap_err();

        assert!(matches!(
            err,
            AppError::AuthErr(AuthError::TokenExchange(_))
        ));
        assert_eq!(user_mock.hits_async().await, 0);
    }

    /// Tests that a failed identity lookup halts the chain before the guild
    /// join.
    ///
    /// Expected: Err(IdentityLookup), guild endpoint never called.
    #[tokio::test]
    async fn test_callback_halts_when_identity_lookup_fails() {
        let server = MockServer::start_async().await;
        let config = Config::for_mock_server(&server);

        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/oauth2/token");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(serde_json::json!({
                        "access_token": "tok1",
                        "token_type": "bearer",
                    }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/users/@me");
                then.status(401)
                    .header("content-type", "application/json")
                    .json_body(serde_json::json!({ "message": "401: Unauthorized" }));
            })
            .await;
        let join_mock = server
            .mock_async(|when, then| {
                when.method(PUT).path("/api/guilds/424242/members/999");
                then.status(201);
            })
            .await;

        let http_client = startup::setup_reqwest_client().unwrap();
        let oauth_client = startup::setup_oauth_client(&config).unwrap();
        let service = DiscordAuthService::new(&http_client, &oauth_client, &config);

        let err = service.callback("abc".to_string()).await.unwrap_err();

        assert!(matches!(
            err,
            AppError::AuthErr(AuthError::IdentityLookup { status: 401 })
        ));
        assert_eq!(join_mock.hits_async().await, 0);
    }

    /// Tests that a rejected guild join surfaces as an error after the
    /// earlier steps succeeded.
    ///
    /// Expected: Err(GuildJoin { status: 403 })
    #[tokio::test]
    async fn test_callback_surfaces_guild_join_failure() {
        let server = MockServer::start_async().await;
        let config = Config::for_mock_server(&server);

        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/oauth2/token");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(serde_json::json!({
                        "access_token": "tok1",
                        "token_type": "bearer",
                    }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/users/@me");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(serde_json::json!({ "id": "999", "username": "tester" }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(PUT).path("/api/guilds/424242/members/999");
                then.status(403)
                    .header("content-type", "application/json")
                    .json_body(serde_json::json!({ "message": "Missing Permissions" }));
            })
            .await;

        let http_client = startup::setup_reqwest_client().unwrap();
        let oauth_client = startup::setup_oauth_client(&config).unwrap();
        let service = DiscordAuthService::new(&http_client, &oauth_client, &config);

        let err = service.callback("abc".to_string()).await.unwrap_err();

        assert!(matches!(
            err,
            AppError::AuthErr(AuthError::GuildJoin { status: 403 })
        ));
    }

    /// Tests that an identity body with an empty id is rejected rather than
    /// passed to the guild join.
    ///
    /// Expected: Err(MissingIdentity), guild endpoint never called.
    #[tokio::test]
    async fn test_callback_rejects_empty_user_id() {
        let server = MockServer::start_async().await;
        let config = Config::for_mock_server(&server);

        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/oauth2/token");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(serde_json::json!({
                        "access_token": "tok1",
                        "token_type": "bearer",
                    }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/users/@me");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(serde_json::json!({ "id": "", "username": "tester" }));
            })
            .await;
        let join_mock = server
            .mock_async(|when, then| {
                when.method(PUT).path("/api/guilds/424242/members/");
                then.status(201);
            })
            .await;

        let http_client = startup::setup_reqwest_client().unwrap();
        let oauth_client = startup::setup_oauth_client(&config).unwrap();
        let service = DiscordAuthService::new(&http_client, &oauth_client, &config);

        let err = service.callback("abc".to_string()).await.unwrap_err();

        assert!(matches!(
            err,
            AppError::AuthErr(AuthError::MissingIdentity)
        ));
        assert_eq!(join_mock.hits_async().await, 0);
    }
}
