//! Static file serving with embedded assets

use axum::{
    body::Body,
    http::{header, Response, StatusCode},
    response::IntoResponse,
};

use crate::assets::bundle::WebAssets;

/// Serve embedded static files under `/static/`
pub async fn serve_static(path: &str) -> impl IntoResponse {
    let path = path.trim_start_matches('/');
    let path = path.strip_prefix("static/").unwrap_or(path);

    match WebAssets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path)
                .first_or_octet_stream()
                .to_string();

            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, mime)],
                Body::from(content.data.into_owned()),
            )
                .into_response()
        }
        None => not_found(),
    }
}

fn not_found() -> Response<Body> {
    (StatusCode::NOT_FOUND, "Not found").into_response()
}
