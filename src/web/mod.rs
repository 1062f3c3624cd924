// Web server — Axum-based upload-and-rank service.
//
// The upload page is embedded at compile time via include_dir!, so the
// binary is self-contained. POST /upload serves JSON; every other path
// falls back to the embedded static assets, with unknown paths serving
// index.html.
//
// Request bodies are capped at the configured upload size before the
// multipart parser ever runs.

use std::sync::Arc;

use anyhow::Result;
use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use include_dir::{include_dir, Dir};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::analysis::tokenizer::Tokenizer;
use crate::config::Config;

pub mod handlers;

// Embed the upload page (form, table rendering, styles) at compile time.
static ASSETS: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/static");

/// Shared application state threaded through all Axum handlers.
///
/// Everything in here is immutable after startup — the tokenizer is
/// compiled once and shared read-only, so concurrent requests need no
/// locks and no coordination.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub tokenizer: Arc<Tokenizer>,
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(config: Config, port: u16, bind: &str) -> Result<()> {
    let tokenizer = Tokenizer::new(&config.alphabets)?;
    let state = AppState {
        config: Arc::new(config),
        tokenizer: Arc::new(tokenizer),
    };

    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("Grist listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Build the router. Public so tests can drive it in-process.
pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health))
        .route("/upload", post(handlers::upload::upload_document))
        .fallback(serve_asset)
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness check — always returns 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

/// Serve the embedded upload page for all non-API paths.
/// Unknown paths fall back to index.html, so the root and any stray path
/// both land on the upload form.
async fn serve_asset(uri: Uri) -> impl IntoResponse {
    let path = uri.path().trim_start_matches('/');

    if let Some(file) = ASSETS.get_file(path) {
        return asset_response(file.contents(), path);
    }

    match ASSETS.get_file("index.html") {
        Some(index) => asset_response(index.contents(), "index.html"),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            [(header::CONTENT_TYPE, "text/plain")],
            Body::from("Static assets missing from this build"),
        )
            .into_response(),
    }
}

fn asset_response(contents: &'static [u8], path: &str) -> Response {
    let mime = mime_type(path);
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, HeaderValue::from_static(mime))
        .body(Body::from(contents))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

fn mime_type(path: &str) -> &'static str {
    let ext = path.rsplit('.').next().unwrap_or("");
    match ext {
        "html" => "text/html; charset=utf-8",
        "js" | "mjs" => "application/javascript",
        "css" => "text/css",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "ico" => "image/x-icon",
        "json" => "application/json",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
