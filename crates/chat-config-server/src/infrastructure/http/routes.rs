//! Router and request handlers for `/api/config`.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chat_config_core::ChatConfig;
use tracing::info;

use super::cors::{cors_layer, CorsError};
use super::error::ApiError;
use crate::application::ConfigRepository;
use crate::domain::config::CorsPolicy;

/// Path of the one resource the service exposes.
pub const CONFIG_PATH: &str = "/api/config";

/// Shared state handed to every handler.
///
/// Holds the process's single repository instance; cloning only bumps the
/// `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ConfigRepository>,
}

/// Builds the application router with `policy` applied to every route.
///
/// # Errors
///
/// Returns [`CorsError`] if the policy lists an origin that is not a valid
/// header value.
pub fn build_router(
    store: Arc<dyn ConfigRepository>,
    policy: &CorsPolicy,
) -> Result<Router, CorsError> {
    let router = Router::new()
        .route(CONFIG_PATH, get(get_config).post(update_config))
        .layer(cors_layer(policy)?)
        .with_state(AppState { store });
    Ok(router)
}

/// `GET /api/config`: returns the current document, seeding it if needed.
async fn get_config(State(state): State<AppState>) -> Result<Json<ChatConfig>, ApiError> {
    let config = state.store.load().await.map_err(ApiError::Load)?;
    Ok(Json(config))
}

/// `POST /api/config`: replaces the whole document and echoes it back.
///
/// The body is validated by the `Json` extractor against the strict schema
/// before the store is called.
async fn update_config(
    State(state): State<AppState>,
    payload: Result<Json<ChatConfig>, JsonRejection>,
) -> Result<Json<ChatConfig>, ApiError> {
    let Json(config) = payload?;
    state.store.save(&config).await.map_err(ApiError::Save)?;
    info!(
        title = %config.title,
        theme = %config.theme,
        chats = config.chats.len(),
        "chat config replaced"
    );
    Ok(Json(config))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
