//! Static file server for the portal front end.
//!
//! Every request is resolved against a fixed root directory. The server never
//! touches the portal state.

use crate::{config::ServerConfig, errors::Result};
use axum::{
    Router,
    extract::State,
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Arc,
};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

/// Content type for a file name, by extension.
#[must_use]
pub fn content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("html") => "text/html",
        Some("js") => "application/javascript",
        Some("css") => "text/css",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Maps a request path to a file under `root`; `None` for paths that try to
/// leave it.
#[must_use]
pub fn resolve(root: &Path, request_path: &str) -> Option<PathBuf> {
    if request_path.contains("..") {
        return None;
    }
    let relative = match request_path {
        "" | "/" => "index.html",
        other => other.trim_start_matches('/'),
    };
    Some(root.join(relative))
}

async fn serve_file(State(root): State<Arc<PathBuf>>, uri: Uri) -> Response {
    let Some(path) = resolve(&root, uri.path()) else {
        warn!(path = uri.path(), "Rejected path outside the web root");
        return (StatusCode::FORBIDDEN, "Forbidden").into_response();
    };

    match tokio::fs::read(&path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, content_type(&path))], bytes).into_response(),
        Err(e) => {
            if e.kind() != ErrorKind::NotFound {
                debug!(path = %path.display(), "Failed to read file: {}", e);
            }
            (StatusCode::NOT_FOUND, "Not found").into_response()
        }
    }
}

/// Builds the router serving files from `root`.
pub fn router(root: impl Into<PathBuf>) -> Router {
    Router::new()
        .fallback(serve_file)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(root.into()))
}

/// Binds `config.host:config.port` and serves until the process stops.
///
/// # Errors
/// Returns an I/O error if the address cannot be bound or the server fails.
pub async fn run(config: &ServerConfig) -> Result<()> {
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, root = %config.root.display(), "Serving static files");
    axum::serve(listener, router(config.root.clone())).await?;
    Ok(())
}
