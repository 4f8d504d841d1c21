//! Static file server for the emitted data files.
//!
//! Serves a directory tree over plain HTTP GET and stamps every response,
//! errors included, with `Access-Control-Allow-Origin: *` so a page loaded
//! from another origin can pull in the generated scripts.

use std::net::SocketAddr;
use std::path::Path;

use axum::http::header::ACCESS_CONTROL_ALLOW_ORIGIN;
use axum::http::HeaderValue;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

pub const DEFAULT_PORT: u16 = 50418;
pub const DEFAULT_BIND: &str = "0.0.0.0";

/// Build the router serving `root`.
pub fn build_router(root: &Path) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(root))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(TraceLayer::new_for_http())
}

/// Serve `root` on `addr` until Ctrl+C or SIGTERM.
pub async fn serve(addr: SocketAddr, root: &Path) -> anyhow::Result<()> {
    let app = build_router(root);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Serving {} on {}", root.display(), listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tempfile::tempdir;
    use tower::ServiceExt;

    async fn get(root: &Path, uri: &str) -> axum::response::Response {
        build_router(root)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_serves_file_with_cors_header() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("js")).unwrap();
        std::fs::write(dir.path().join("js/mediaMetadata.js"), "window.mediaMetadata = [];\n").unwrap();

        let response = get(dir.path(), "/js/mediaMetadata.js").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"window.mediaMetadata = [];\n");
    }

    #[tokio::test]
    async fn test_not_found_has_cors_header() {
        let dir = tempdir().unwrap();

        let response = get(dir.path(), "/missing.js").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }
}
