use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{
    error::{auth::AuthError, AppError},
    service::{kajabi::KajabiService, oauth::DiscordAuthService},
    state::AppState,
};

/// Query parameters for the link initiation endpoint.
#[derive(Deserialize)]
pub struct LoginParams {
    /// Kajabi member id, forwarded to Discord as the OAuth `state` value.
    pub state: Option<String>,
}

/// Query parameters for the OAuth callback endpoint.
#[derive(Deserialize)]
pub struct CallbackParams {
    /// Authorization code issued by Discord for the token exchange.
    pub code: Option<String>,
    /// Kajabi member id round-tripped through the OAuth `state` value.
    pub state: Option<String>,
}

pub async fn login(
    State(state): State<AppState>,
    Query(params): Query<LoginParams>,
) -> Result<impl IntoResponse, AppError> {
    let member_id = params
        .state
        .filter(|id| !id.is_empty())
        .ok_or(AuthError::MissingMemberId)?;

    let auth_service =
        DiscordAuthService::new(&state.http_client, &state.oauth_client, &state.config);
    let url = auth_service.login_url(&member_id);

    tracing::info!("Redirecting member {} to Discord OAuth2", member_id);

    Ok(redirect_found(url.as_str()))
}

pub async fn callback(
    State(state): State<AppState>,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let (code, member_id) = match (params.code, params.state) {
        (Some(code), Some(id)) if !code.is_empty() && !id.is_empty() => (code, id),
        _ => return Err(AuthError::MissingCodeOrState.into()),
    };

    let auth_service =
        DiscordAuthService::new(&state.http_client, &state.oauth_client, &state.config);
    let kajabi_service = KajabiService::new(&state.http_client, &state.config);

    let user = auth_service.callback(code).await?;

    if let Err(err) = kajabi_service.link_discord_id(&member_id, &user.id).await {
        // Partial success: the user is already in the guild, only the
        // member record is left unlinked.
        tracing::warn!(
            "Discord user {} joined the guild but Kajabi member {} was not updated: {}",
            user.id,
            member_id,
            err
        );
        return Err(err);
    }

    Ok(redirect_found(&state.config.discord_invite_url))
}

/// 302 Found redirect. Axum's `Redirect` helper only produces 303/307/308;
/// these OAuth hops use the classic 302.
fn redirect_found(location: &str) -> Response {
    (
        StatusCode::FOUND,
        [(header::LOCATION, location.to_string())],
    )
        .into_response()
}
