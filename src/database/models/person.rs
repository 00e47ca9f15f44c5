use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::BotError;
use crate::utils::logging::log_database_operation;

/// A person whose birthday the bot announces. Stored in the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Person {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// `YYYY-MM-DD`; only month and day are used for matching
    pub birthday: String,
    pub telegram_id: Option<String>,
    pub photo_file_id: Option<String>,
    pub congratulation_text: Option<String>,
}

const SELECT_COLUMNS: &str =
    "SELECT id, first_name, last_name, birthday, telegram_id, photo_file_id, congratulation_text FROM users";

impl Person {
    pub async fn create(
        pool: &sqlx::SqlitePool,
        first_name: &str,
        last_name: &str,
        birthday: &str,
        congratulation_text: Option<&str>,
    ) -> Result<i64, BotError> {
        for (field, value) in [
            ("first_name", first_name),
            ("last_name", last_name),
            ("birthday", birthday),
        ] {
            if value.trim().is_empty() {
                return Err(BotError::EmptyField(field));
            }
        }

        let result = sqlx::query(
            "INSERT INTO users (first_name, last_name, birthday, congratulation_text) VALUES (?, ?, ?, ?)"
        )
        .bind(first_name)
        .bind(last_name)
        .bind(birthday)
        .bind(congratulation_text)
        .execute(pool)
        .await?;

        let id = result.last_insert_rowid();
        log_database_operation("INSERT", "users", Some(&format!("id={id}")));
        Ok(id)
    }

    pub async fn find_by_id(
        pool: &sqlx::SqlitePool,
        id: i64,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Person>(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Returns the number of rows touched; zero when `id` is unknown.
    pub async fn update(
        pool: &sqlx::SqlitePool,
        id: i64,
        first_name: &str,
        last_name: &str,
        birthday: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE users SET first_name = ?, last_name = ?, birthday = ? WHERE id = ?"
        )
        .bind(first_name)
        .bind(last_name)
        .bind(birthday)
        .bind(id)
        .execute(pool)
        .await?;

        log_database_operation("UPDATE", "users", Some(&format!("id={id} names+birthday")));
        Ok(result.rows_affected())
    }

    pub async fn set_photo(
        pool: &sqlx::SqlitePool,
        id: i64,
        photo_file_id: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE users SET photo_file_id = ? WHERE id = ?")
            .bind(photo_file_id)
            .bind(id)
            .execute(pool)
            .await?;

        log_database_operation("UPDATE", "users", Some(&format!("id={id} photo")));
        Ok(result.rows_affected())
    }

    pub async fn set_text(
        pool: &sqlx::SqlitePool,
        id: i64,
        congratulation_text: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE users SET congratulation_text = ? WHERE id = ?")
            .bind(congratulation_text)
            .bind(id)
            .execute(pool)
            .await?;

        log_database_operation("UPDATE", "users", Some(&format!("id={id} text")));
        Ok(result.rows_affected())
    }

    pub async fn delete(
        pool: &sqlx::SqlitePool,
        id: i64,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        log_database_operation("DELETE", "users", Some(&format!("id={id}")));
        Ok(result.rows_affected())
    }

    pub async fn list_all(
        pool: &sqlx::SqlitePool,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Person>(&format!("{SELECT_COLUMNS} ORDER BY id"))
            .fetch_all(pool)
            .await
    }

    /// People whose birthday ends with `month_day` (`MM-DD`), whatever the year.
    pub async fn find_by_month_day(
        pool: &sqlx::SqlitePool,
        month_day: &str,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Person>(&format!("{SELECT_COLUMNS} WHERE substr(birthday, -5) = ? ORDER BY id"))
            .bind(month_day)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &sqlx::SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
