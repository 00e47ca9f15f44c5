use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A completed daily congratulation run.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Announcement {
    /// `YYYY-MM-DD` in host-local time
    pub announced_on: String,
    pub people_count: i64,
    pub announced_at: String,
}

impl Announcement {
    pub async fn record(
        pool: &sqlx::SqlitePool,
        date: NaiveDate,
        people_count: i64,
    ) -> Result<Self, sqlx::Error> {
        let announced_on = date.format("%Y-%m-%d").to_string();
        let announced_at = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT OR REPLACE INTO announcements (announced_on, people_count, announced_at) VALUES (?, ?, ?)"
        )
        .bind(&announced_on)
        .bind(people_count)
        .bind(&announced_at)
        .execute(pool)
        .await?;

        Ok(Announcement {
            announced_on,
            people_count,
            announced_at,
        })
    }

    pub async fn exists(
        pool: &sqlx::SqlitePool,
        date: NaiveDate,
    ) -> Result<bool, sqlx::Error> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM announcements WHERE announced_on = ?"
        )
        .bind(date.format("%Y-%m-%d").to_string())
        .fetch_one(pool)
        .await?;

        Ok(count > 0)
    }

    pub async fn latest(
        pool: &sqlx::SqlitePool,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Announcement>(
            "SELECT announced_on, people_count, announced_at FROM announcements ORDER BY announced_on DESC LIMIT 1"
        )
        .fetch_optional(pool)
        .await
    }
}
