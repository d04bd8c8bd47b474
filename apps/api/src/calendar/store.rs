use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::errors::AppError;
use crate::models::calendar::CalendarEntryRow;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarStatus {
    #[default]
    Planned,
    Completed,
}

impl CalendarStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CalendarStatus::Planned => "Planned",
            CalendarStatus::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewCalendarEntry<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub date: NaiveDate,
    pub status: CalendarStatus,
}

pub async fn add_entry(
    pool: &SqlitePool,
    entry: &NewCalendarEntry<'_>,
) -> Result<CalendarEntryRow, AppError> {
    let title = entry.title.trim();
    let description = entry.description.trim();
    if title.is_empty() || description.is_empty() {
        return Err(AppError::Validation(
            "title and description are required".to_string(),
        ));
    }

    let row = sqlx::query_as::<_, CalendarEntryRow>(
        r#"
        INSERT INTO calendar (title, description, date, status)
        VALUES (?, ?, ?, ?)
        RETURNING id, title, description, date, status
        "#,
    )
    .bind(title)
    .bind(description)
    .bind(entry.date)
    .bind(entry.status.as_str())
    .fetch_one(pool)
    .await?;
    Ok(row)
}

/// Every entry, earliest date first.
pub async fn list_entries(pool: &SqlitePool) -> Result<Vec<CalendarEntryRow>, AppError> {
    let rows = sqlx::query_as::<_, CalendarEntryRow>(
        "SELECT id, title, description, date, status FROM calendar ORDER BY date ASC, id ASC",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn update_status(
    pool: &SqlitePool,
    id: i64,
    status: CalendarStatus,
) -> Result<(), AppError> {
    let result = sqlx::query("UPDATE calendar SET status = ? WHERE id = ?")
        .bind(status.as_str())
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Calendar entry {id} not found")));
    }
    Ok(())
}

pub async fn delete_entry(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM calendar WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Calendar entry {id} not found")));
    }
    Ok(())
}
