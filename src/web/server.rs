//! Axum web server setup

use axum::{extract::Request, routing::get, Router};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;

use super::handlers::{self, AppState};
use super::static_files::serve_static;

/// Build the router serving the page, the asset report and static files
pub fn router(config: Arc<Config>) -> Router {
    let app_state = Arc::new(AppState { config });

    let static_handler = |req: Request| async move {
        let path = req.uri().path();
        serve_static(path).await
    };

    Router::new()
        .route("/", get(handlers::index))
        .route("/api/assets", get(handlers::get_assets))
        .with_state(app_state)
        .fallback(static_handler)
        .layer(TraceLayer::new_for_http())
}

/// Start the web server and run until `shutdown` resolves
pub async fn start_server(
    config: Arc<Config>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let listener =
        tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let app = router(config);

    info!("Pitch page available at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
