use axum::{routing::get, Router};

use crate::{
    controller::{
        auth::{callback, login},
        health::health,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/discord/oauth2", get(login))
        .route("/discord/callback", get(callback))
        .route("/health", get(health))
}
