// Research group members - API core
//
// A REST API over a single "member" resource persisted in SQLite.
// Routing lives in server/, records and persistence in domains/member/.

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
