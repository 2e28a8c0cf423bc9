//! Test harness backed by an in-memory SQLite database.
//!
//! Every harness gets its own database with migrations applied, so tests can
//! run in parallel without sharing rows.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    body::{to_bytes, Body, Bytes},
    http::{header::CONTENT_TYPE, HeaderMap, Method, Request, StatusCode},
    Router,
};
use members_core::domains::member::{MemberStore, SqliteMemberStore};
use members_core::server::build_app;
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Test harness that owns one database and the store over it.
///
/// ```ignore
/// #[tokio::test]
/// async fn my_test() {
///     let ctx = TestHarness::new().await.unwrap();
///     let response = ctx.get("/api/members").await;
/// }
/// ```
pub struct TestHarness {
    /// Database pool - use this for assertions on raw rows.
    pub db_pool: SqlitePool,
    /// Store over `db_pool` - use this for fixtures.
    pub store: Arc<SqliteMemberStore>,
}

impl TestHarness {
    pub async fn new() -> Result<Self> {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        // An in-memory database lives only as long as its connection, so keep
        // exactly one and never recycle it.
        let db_pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .context("Failed to open in-memory database")?;

        sqlx::migrate!("./migrations")
            .run(&db_pool)
            .await
            .context("Failed to run migrations")?;

        let store = Arc::new(SqliteMemberStore::new(db_pool.clone()));

        Ok(Self { db_pool, store })
    }

    pub fn app(&self) -> Router {
        let store: Arc<dyn MemberStore> = self.store.clone();
        build_app(self.db_pool.clone(), store, &[])
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> TestResponse {
        self.send(Method::POST, uri, Some(body.to_string())).await
    }

    pub async fn patch_json(&self, uri: &str, body: Value) -> TestResponse {
        self.send(Method::PATCH, uri, Some(body.to_string())).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(Method::DELETE, uri, None).await
    }

    /// Send a request with a raw body; `Some` bodies are labelled as JSON.
    pub async fn send(&self, method: Method, uri: &str, body: Option<String>) -> TestResponse {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body)),
            None => builder.body(Body::empty()),
        }
        .expect("valid request");

        self.call(request).await
    }

    pub async fn call(&self, request: Request<Body>) -> TestResponse {
        let response = self.app().oneshot(request).await.expect("infallible");
        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("readable body");

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is JSON")
    }
}
