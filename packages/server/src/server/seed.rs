//! Demo data for local development.

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::domains::member::{Member, MemberStatus, MemberStore};

/// The four members shipped with the demo database.
pub fn demo_members() -> Vec<Member> {
    [
        (1, "Tom", "Mens", "Tom.MENS@umons.ac.be", (2003, 10, 1)),
        (2, "Guillaume", "Cardoen", "Guillaume.CARDOEN@umons.ac.be", (2023, 9, 15)),
        (3, "Valentin", "Dusollier", "Valentin.Dusollier@umons.ac.be", (2023, 9, 15)),
        (4, "Sébastien", "Bonte", "Sebastien.BONTE@umons.ac.be", (2019, 9, 15)),
    ]
    .into_iter()
    .filter_map(|(id, first_name, last_name, email, (y, m, d))| {
        Some(Member {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            status: MemberStatus::Assistant,
            begin_date: NaiveDate::from_ymd_opt(y, m, d)?,
            end_date: None,
        })
    })
    .collect()
}

/// Upsert the demo members; running it twice leaves the same four rows.
pub async fn seed_demo_members(store: &dyn MemberStore) -> Result<usize> {
    let members = demo_members();
    for member in &members {
        store
            .save(member)
            .await
            .with_context(|| format!("Failed to seed member {}", member.id))?;
    }

    tracing::info!(count = members.len(), "Seeded demo members");
    Ok(members.len())
}
