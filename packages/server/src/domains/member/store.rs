// Member persistence
//
// The trait is the seam the HTTP layer depends on; `SqliteMemberStore` is the
// production implementation over a sqlx pool.

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::SqlitePool;

use super::models::{Member, MemberRow};

#[async_trait]
pub trait MemberStore: Send + Sync {
    /// All members in storage order
    async fn find_all(&self) -> Result<Vec<Member>>;

    async fn exists_by_id(&self, id: i32) -> Result<bool>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Member>>;

    /// Insert or overwrite the record with `member.id`, returning what was stored
    async fn save(&self, member: &Member) -> Result<Member>;

    /// Remove the record with `member.id`; a no-op when it is already gone
    async fn delete(&self, member: &Member) -> Result<()>;

    async fn count(&self) -> Result<i64>;
}

/// SQLite-backed member store
#[derive(Debug, Clone)]
pub struct SqliteMemberStore {
    pool: SqlitePool,
}

impl SqliteMemberStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberStore for SqliteMemberStore {
    async fn find_all(&self) -> Result<Vec<Member>> {
        let rows = sqlx::query_as::<_, MemberRow>("SELECT * FROM members ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .context("Failed to list members")?;

        rows.into_iter().map(Member::try_from).collect()
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM members WHERE id = ?)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .with_context(|| format!("Failed to check member {id}"))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Member>> {
        let row = sqlx::query_as::<_, MemberRow>("SELECT * FROM members WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Failed to load member {id}"))?;

        row.map(Member::try_from).transpose()
    }

    async fn save(&self, member: &Member) -> Result<Member> {
        let row = sqlx::query_as::<_, MemberRow>(
            "INSERT INTO members (
                id,
                first_name,
                last_name,
                email,
                status,
                begin_date,
                end_date
             )
             VALUES (?, ?, ?, ?, ?, ?, ?)
             ON CONFLICT (id) DO UPDATE SET
                first_name = excluded.first_name,
                last_name = excluded.last_name,
                email = excluded.email,
                status = excluded.status,
                begin_date = excluded.begin_date,
                end_date = excluded.end_date
             RETURNING *",
        )
        .bind(member.id)
        .bind(&member.first_name)
        .bind(&member.last_name)
        .bind(&member.email)
        .bind(member.status.as_str())
        .bind(member.begin_date)
        .bind(member.end_date)
        .fetch_one(&self.pool)
        .await
        .with_context(|| format!("Failed to save member {}", member.id))?;

        Member::try_from(row)
    }

    async fn delete(&self, member: &Member) -> Result<()> {
        sqlx::query("DELETE FROM members WHERE id = ?")
            .bind(member.id)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Failed to delete member {}", member.id))?;

        Ok(())
    }

    async fn count(&self) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM members")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count members")
    }
}
