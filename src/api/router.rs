//! Service routers.
//!
//! Each service gets its own composable `Router` so the two surfaces
//! stay independently mountable; `api_router` merges both for the
//! single-process default. Every route sits behind the access gate.
//!
//! Middleware uses `Extension<ApiContext>` (injected as the outermost
//! layer). Endpoint handlers use `State<ApiContext>` (provided via
//! `with_state`).

use axum::routing::{get, post, put};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;

/// Conversation service: CRUD under `/conversation`.
pub fn conversation_router(ctx: ApiContext) -> Router {
    Router::new()
        .route(
            "/conversation/",
            post(endpoints::conversations::create).get(endpoints::conversations::list),
        )
        .route(
            "/conversation/:conversation_id",
            get(endpoints::conversations::read)
                .put(endpoints::conversations::update)
                .delete(endpoints::conversations::delete),
        )
        .with_state(ctx.clone())
        .layer(axum::middleware::from_fn(middleware::auth::require_auth))
        .layer(axum::Extension(ctx))
}

/// Message service: create/list/update under `/message`, plus the
/// liveness probe.
pub fn message_router(ctx: ApiContext) -> Router {
    Router::new()
        .route("/message/", post(endpoints::messages::create))
        .route("/message/hello/", get(endpoints::health::hello))
        .route(
            "/message/conversation/:conversation_id",
            get(endpoints::messages::list_by_conversation),
        )
        .route("/message/:message_id", put(endpoints::messages::update))
        .with_state(ctx.clone())
        .layer(axum::middleware::from_fn(middleware::auth::require_auth))
        .layer(axum::Extension(ctx))
}

/// Both services on one router, with request tracing outermost.
pub fn api_router(ctx: ApiContext) -> Router {
    Router::new()
        .merge(conversation_router(ctx.clone()))
        .merge(message_router(ctx))
        .layer(TraceLayer::new_for_http())
}
