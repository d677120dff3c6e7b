//! Route registration: collects all module routes + system endpoints.

use std::time::Duration;

use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tracing::{info, warn};

use billing_core::ServiceError;

/// Build the complete router with all routes.
pub fn build_router(module_routes: Vec<(&str, Router)>, timeout: Option<Duration>) -> Router {
    let mut app = Router::new()
        .route("/health", get(health))
        .route("/version", get(version));

    // Module routers carry absolute paths and their own state.
    for (name, router) in module_routes {
        info!(module = name, "mounting routes");
        app = app.merge(router);
    }

    match timeout {
        Some(limit) => app.layer(middleware::from_fn_with_state(limit, request_timeout)),
        None => app,
    }
}

/// Fail a request that runs past `limit`.
async fn request_timeout(State(limit): State<Duration>, req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    match tokio::time::timeout(limit, next.run(req)).await {
        Ok(resp) => resp,
        Err(_) => {
            warn!(%method, path = %path, ?limit, "request timed out");
            ServiceError::Timeout("request timed out".into()).into_response()
        }
    }
}

async fn health() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "status": "ok",
    }))
}

async fn version() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": "billingd",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
