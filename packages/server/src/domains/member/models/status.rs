use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Role of a member within the group.
///
/// Serialized by its symbolic name (`"Professor"`, `"PhD"`, ...). Any other
/// symbol fails to decode, which the HTTP layer reports as malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberStatus {
    Professor,
    Postdoc,
    PhD,
    Assistant,
}

impl MemberStatus {
    pub const ALL: [MemberStatus; 4] = [
        MemberStatus::Professor,
        MemberStatus::Postdoc,
        MemberStatus::PhD,
        MemberStatus::Assistant,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MemberStatus::Professor => "Professor",
            MemberStatus::Postdoc => "Postdoc",
            MemberStatus::PhD => "PhD",
            MemberStatus::Assistant => "Assistant",
        }
    }
}

impl fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown member status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for MemberStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}
