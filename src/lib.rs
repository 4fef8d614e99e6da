//! Links Kajabi members to Discord accounts through the OAuth2
//! authorization-code flow.
//!
//! A member arrives at `/discord/oauth2` carrying their Kajabi member id in
//! the `state` query parameter and is redirected to Discord's authorization
//! page. Discord sends them back to `/discord/callback`, where the service
//! exchanges the authorization code for an access token, resolves the
//! authenticated Discord user, adds them to the configured guild, and writes
//! the Discord user id into the member's Kajabi record before redirecting to
//! the guild invite link.
//!
//! Nothing is persisted: the member id travels through the OAuth `state`
//! parameter and tokens are dropped at the end of each request.

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
