//! Test fixtures for creating test data.

use anyhow::Result;
use chrono::NaiveDate;
use members_core::domains::member::{Member, MemberStatus, MemberStore};
use serde_json::{json, Value};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Assistant with both dates set
pub fn guillaume() -> Member {
    Member {
        id: 1,
        first_name: "Guillaume".to_string(),
        last_name: "Cardoen".to_string(),
        email: "Guillaume.CARDOEN@umons.ac.be".to_string(),
        status: MemberStatus::Assistant,
        begin_date: date(2023, 9, 15),
        end_date: Some(date(2029, 9, 15)),
    }
}

/// Professor without an end date
pub fn tom() -> Member {
    Member {
        id: 2,
        first_name: "Tom".to_string(),
        last_name: "Mens".to_string(),
        email: "Tom.MENS@umons.ac.be".to_string(),
        status: MemberStatus::Professor,
        begin_date: date(2003, 10, 1),
        end_date: None,
    }
}

/// The POST body used by the walkthrough scenario
pub fn tom_assistant_json() -> Value {
    json!({
        "id": 1,
        "firstName": "Tom",
        "lastName": "Mens",
        "email": "t@x.be",
        "status": "Assistant",
        "beginDate": "2003-10-01",
        "endDate": null,
    })
}

pub async fn insert_members(store: &dyn MemberStore, members: &[Member]) -> Result<()> {
    for member in members {
        store.save(member).await?;
    }
    Ok(())
}
