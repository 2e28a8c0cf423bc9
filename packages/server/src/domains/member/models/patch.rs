use chrono::NaiveDate;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

use super::status::MemberStatus;

/// Partial update for a [`Member`](super::member::Member).
///
/// Each field is `None` when absent from the request body. Unknown keys,
/// wrongly typed values and unknown status symbols fail the whole decode, so
/// nothing is merged unless every field is valid.
///
/// `id` may appear with any value and is dropped. `endDate: null` clears the
/// end date; `null` for any other field is rejected.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MemberPatch {
    #[serde(default, rename = "id")]
    ignored_id: Option<IgnoredAny>,
    #[serde(default, deserialize_with = "present")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub status: Option<MemberStatus>,
    #[serde(default, deserialize_with = "present")]
    pub begin_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "present")]
    pub end_date: Option<Option<NaiveDate>>,
}

impl MemberPatch {
    /// True when the body named no field other than `id`.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.status.is_none()
            && self.begin_date.is_none()
            && self.end_date.is_none()
    }

    /// Whether the body carried an `id` key (which is ignored).
    pub fn had_id(&self) -> bool {
        self.ignored_id.is_some()
    }
}

// Only called when the key is present; absent keys fall back to `default`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
