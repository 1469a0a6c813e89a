//! HTTP API 路由
//!
//! | 模块 | 路径 |
//! |------|------|
//! | [`health`] | `/`, `/health` |
//! | [`seed`] | `/api/initialize-database` |
//! | [`transactions`] | `/api/transactions` |
//! | [`statistics`] | `/api/statistics` |
//! | [`charts`] | `/api/bar-chart`, `/api/pie-chart`, `/api/combined-data` |

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

pub mod charts;
pub mod health;
pub mod middleware;
pub mod params;
pub mod seed;
pub mod statistics;
pub mod transactions;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(seed::router())
        .merge(transactions::router())
        .merge(statistics::router())
        .merge(charts::router())
}

/// Build the full application: routes, middleware and state
///
/// Used by the HTTP server and by the integration tests (oneshot).
pub fn router(state: ServerState) -> Router {
    build_router()
        // CORS - dashboard is served from another origin
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        // Request logging
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        // Request ID - outermost, so logging sees it
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        .with_state(state)
}
