use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::patch::MemberPatch;
use super::status::MemberStatus;

/// A member of the research group.
///
/// This is both the persisted record and the JSON representation served by
/// `/api/members`. The `id` is chosen by the client on creation and never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub status: MemberStatus,
    pub begin_date: NaiveDate,
    /// `None` while the member is still active
    pub end_date: Option<NaiveDate>,
}

impl Member {
    /// Whether the member has no end date.
    pub fn is_active(&self) -> bool {
        self.end_date.is_none()
    }

    /// Merge a decoded patch into this record.
    ///
    /// Only the fields present in the patch are overwritten. The id is never
    /// touched.
    pub fn apply(mut self, patch: MemberPatch) -> Self {
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(begin_date) = patch.begin_date {
            self.begin_date = begin_date;
        }
        if let Some(end_date) = patch.end_date {
            self.end_date = end_date;
        }
        self
    }
}

/// Raw `members` row as stored in SQLite.
///
/// Status is kept as text in the table; conversion into [`Member`] checks it
/// against the closed set.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct MemberRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub status: String,
    pub begin_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

impl TryFrom<MemberRow> for Member {
    type Error = anyhow::Error;

    fn try_from(row: MemberRow) -> Result<Self> {
        let status = row
            .status
            .parse::<MemberStatus>()
            .with_context(|| format!("member {} has a corrupt status column", row.id))?;

        Ok(Self {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            status,
            begin_date: row.begin_date,
            end_date: row.end_date,
        })
    }
}
