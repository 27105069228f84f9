//! HTTP endpoint handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::{debug, error};

use crate::assets::inspect_assets;
use crate::config::Config;
use crate::deck::render_page;

use super::types::{ApiResponse, AssetsResponse};

/// Shared application state for web handlers
pub struct AppState {
    pub config: Arc<Config>,
}

/// GET / - Render the page from scratch
pub async fn index(State(state): State<Arc<AppState>>) -> Response {
    let config = state.config.clone();
    let rendered = tokio::task::spawn_blocking(move || render_page(&config)).await;

    match rendered {
        Ok(Ok(html)) => {
            debug!("Rendered page ({} bytes)", html.len());
            Html(html).into_response()
        }
        Ok(Err(e)) => {
            error!("Failed to render page: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Page could not be rendered").into_response()
        }
        Err(e) => {
            error!("Render task failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Page could not be rendered").into_response()
        }
    }
}

/// GET /api/assets - Report the state of the page images
pub async fn get_assets(State(state): State<Arc<AppState>>) -> Json<ApiResponse<AssetsResponse>> {
    let config = state.config.clone();
    let report = tokio::task::spawn_blocking(move || inspect_assets(&config.assets)).await;

    match report {
        Ok(report) => Json(ApiResponse::ok(AssetsResponse::from(report))),
        Err(e) => {
            error!("Asset inspection task failed: {}", e);
            Json(ApiResponse::error(format!("Asset inspection failed: {}", e)))
        }
    }
}
