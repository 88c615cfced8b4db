//! # Hello Service
//!
//! Minimal HTTP service with a root greeting and a health check.
//!
//! ## Modules
//!
//! - [`handlers`] - HTTP request handlers
//! - [`config`] - Listen address and log format from the environment
//! - [`telemetry`] - Tracing subscriber setup
//! - [`utils`] - Route paths, response bodies and defaults

pub mod config;
pub mod error;
pub mod handlers;
pub mod telemetry;
pub mod utils;

use std::future::Future;
use std::io;

use axum::{
    Router,
    body::Body,
    http::Request,
    routing::get,
};
use tokio::{net::TcpListener, signal};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use uuid::Uuid;

use crate::handlers::{health_check, hello, not_found};
use crate::utils::constant::*;

/// Builds the application router.
///
/// `GET /` and `GET /health` answer with fixed plain-text bodies. Every other
/// path, and every other method on those two paths, gets a 404.
pub fn app() -> Router {
    Router::new()
        .route(ROOT_PATH, get(hello).fallback(not_found))
        .route(HEALTH_PATH, get(health_check).fallback(not_found))
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .headers()
                        .get(REQUEST_ID_HEADER)
                        .and_then(|value| value.to_str().ok())
                        .map(str::to_owned)
                        .unwrap_or_else(|| Uuid::new_v4().to_string());

                    tracing::info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = %request.method(),
                        uri = %request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// Serves [`app`] on `listener` until `shutdown` resolves, then drains
/// in-flight requests.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app())
        .with_graceful_shutdown(shutdown)
        .await
}

/// Resolves on Ctrl+C or, on unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use tower::util::ServiceExt;

    use super::*;

    async fn call(method: Method, uri: &str) -> (StatusCode, Option<String>, String) {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get("content-type")
            .map(|v| v.to_str().unwrap().to_owned());
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn root_returns_greeting() {
        let (status, content_type, body) = call(Method::GET, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().starts_with("text/plain"));
        assert_eq!(body, HELLO_MESSAGE);
    }

    #[tokio::test]
    async fn health_returns_fixed_body() {
        let (status, content_type, body) = call(Method::GET, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().starts_with("text/plain"));
        assert_eq!(body, HEALTH_MESSAGE);
    }

    #[tokio::test]
    async fn unknown_paths_are_not_found() {
        for path in ["/missing", "/health/", "/healthz", "/api/health"] {
            let (status, _, _) = call(Method::GET, path).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "path {path}");
        }
    }

    #[tokio::test]
    async fn other_methods_on_known_paths_are_not_found() {
        for method in [Method::POST, Method::PUT, Method::DELETE, Method::PATCH] {
            for path in [ROOT_PATH, HEALTH_PATH] {
                let (status, _, _) = call(method.clone(), path).await;
                assert_eq!(status, StatusCode::NOT_FOUND, "{method} {path}");
            }
        }
    }

    #[tokio::test]
    async fn head_mirrors_get_without_body() {
        let (status, _, body) = call(Method::HEAD, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
    }
}
