//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::get,
    Router,
};
use sqlx::SqlitePool;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domains::member::MemberStore;
use crate::server::routes::{
    create_member, delete_member, get_member, health_handler, list_members, patch_member,
};

/// Shared application state
///
/// The store is constructed once at startup and lives as long as the process.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub members: Arc<dyn MemberStore>,
}

/// Build the Axum application router
///
/// `allowed_origins` feeds CORS; an empty list allows any origin.
pub fn build_app(
    pool: SqlitePool,
    members: Arc<dyn MemberStore>,
    allowed_origins: &[String],
) -> Router {
    let app_state = AppState {
        db_pool: pool,
        members,
    };

    let cors = CorsLayer::new()
        .allow_origin(allow_origin(allowed_origins))
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/api/members", get(list_members).post(create_member))
        .route(
            "/api/members/:id",
            get(get_member).patch(patch_member).delete(delete_member),
        )
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

fn allow_origin(allowed_origins: &[String]) -> AllowOrigin {
    if allowed_origins.is_empty() {
        return AllowOrigin::from(Any);
    }

    let origins = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect::<Vec<_>>();

    AllowOrigin::list(origins)
}
