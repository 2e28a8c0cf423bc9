//! Member domain - the research group's member records
//!
//! HTTP handler → `MemberStore` → SQLite `members` table

pub mod models;
pub mod store;

pub use models::{Member, MemberPatch, MemberStatus};
pub use store::{MemberStore, SqliteMemberStore};
