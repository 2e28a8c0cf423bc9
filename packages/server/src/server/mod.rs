// HTTP server setup (Axum)
pub mod app;
pub mod routes;
pub mod seed;

pub use app::*;
