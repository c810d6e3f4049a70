//! HTTP server with graceful shutdown

use axum::{middleware::map_response, Router};
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};

use crate::{
    config::Config,
    error::Result,
    middleware::{
        envelope_errors, request_id_layer, request_id_propagation_layer, sensitive_headers_layer,
    },
};

/// Server instance
pub struct Server {
    config: Config,
}

impl Server {
    /// Create a new server instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Bind the configured address and serve until SIGINT/SIGTERM
    pub async fn serve(self, app: Router) -> Result<()> {
        let addr = self.config.service.socket_addr();

        tracing::info!("Starting {} on {}", self.config.service.name, addr);

        let listener = TcpListener::bind(addr).await?;
        self.serve_on(listener, app).await
    }

    /// Serve on an already-bound listener until SIGINT/SIGTERM
    pub async fn serve_on(self, listener: TcpListener, app: Router) -> Result<()> {
        self.log_middleware_config();

        let app = self.apply_middleware(app);

        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }

    /// Wrap the router in the middleware stack
    ///
    /// Each `layer` call wraps everything added before it, so the first layer
    /// here is the innermost.
    pub fn apply_middleware(&self, app: Router) -> Router {
        let middleware = &self.config.middleware;

        let mut app = app;

        if middleware.catch_panic {
            app = app.layer(CatchPanicLayer::new());
        }

        app = app
            .layer(TimeoutLayer::with_status_code(
                http::StatusCode::REQUEST_TIMEOUT,
                self.config.service.timeout(),
            ))
            .layer(RequestBodyLimitLayer::new(middleware.body_limit_bytes()))
            // Timeouts, oversized bodies and panics answer with bare bodies
            .layer(map_response(envelope_errors))
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().include_headers(true))
                    .on_response(DefaultOnResponse::new().include_headers(true)),
            )
            .layer(sensitive_headers_layer());

        if middleware.request_id_enabled {
            // Set runs before propagate so the trace span and response both see the id
            app = app.layer(
                ServiceBuilder::new()
                    .layer(request_id_layer())
                    .layer(request_id_propagation_layer()),
            );
        }

        if middleware.compression {
            app = app.layer(CompressionLayer::new());
        }

        app.layer(self.build_cors_layer())
    }

    /// Log middleware configuration for debugging
    fn log_middleware_config(&self) {
        let middleware = &self.config.middleware;

        tracing::info!("Middleware configuration:");
        tracing::info!("  - Panic recovery: {}", middleware.catch_panic);
        tracing::info!("  - Request ID tracking: {}", middleware.request_id_enabled);
        tracing::info!("  - Sensitive header masking: enabled");
        tracing::info!("  - Request body limit: {} KB", middleware.body_limit_kb);
        tracing::info!("  - Compression: {}", middleware.compression);
        tracing::info!("  - CORS mode: {}", middleware.cors_mode);
        tracing::info!(
            "  - Request timeout: {} seconds",
            self.config.service.timeout_secs
        );
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build CORS layer based on configuration
    fn build_cors_layer(&self) -> CorsLayer {
        match self.config.middleware.cors_mode.as_str() {
            "permissive" => {
                tracing::debug!("Enabling permissive CORS");
                CorsLayer::permissive()
            }
            "restrictive" | "disabled" => {
                tracing::debug!("Enabling restrictive CORS (default deny)");
                CorsLayer::new()
            }
            other => {
                tracing::warn!("Unknown CORS mode: {}, defaulting to permissive", other);
                CorsLayer::permissive()
            }
        }
    }
}

/// Wait for shutdown signal (SIGTERM or SIGINT)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl+C), starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        },
    }

    tracing::info!("Shutdown signal received, draining requests...");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{router::build_router, state::AppState};
    use axum::body::{to_bytes, Body};
    use http::{Request, StatusCode};
    use tower::ServiceExt;

    #[test]
    fn test_server_creation() {
        let config = Config::default();
        let server = Server::new(config.clone());
        assert_eq!(server.config().service.port, config.service.port);
    }

    #[tokio::test]
    async fn test_middleware_stack_sets_request_id() {
        let config = Config::default();
        let app = Server::new(config.clone()).apply_middleware(build_router(AppState::new(config)));

        let response = app
            .oneshot(Request::builder().uri("/users").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
    }

    fn limited_app() -> Router {
        let mut config = Config::default();
        config.middleware.body_limit_kb = 1;
        Server::new(config.clone()).apply_middleware(build_router(AppState::new(config)))
    }

    fn large_body() -> String {
        let name = "x".repeat(4096);
        format!(r#"{{"name":"{name}","email":"a@x.com"}}"#)
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_body_limit_rejects_large_payload() {
        let body = large_body();
        let response = limited_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/users")
                    .header("content-type", "application/json")
                    .header("content-length", body.len())
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
        assert_eq!(
            json_body(response).await,
            serde_json::json!({"success": false, "error": "Payload too large"})
        );
    }

    #[tokio::test]
    async fn test_body_limit_without_content_length() {
        let response = limited_app()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/users/1")
                    .body(Body::from(large_body()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(
            json_body(response).await,
            serde_json::json!({"success": false, "error": "Payload too large"})
        );
    }
}
