pub mod member;
pub mod patch;
pub mod status;

pub use member::{Member, MemberRow};
pub use patch::MemberPatch;
pub use status::{MemberStatus, UnknownStatus};
