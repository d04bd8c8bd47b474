//! Axum route handlers for the content calendar.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::calendar::store::{
    add_entry, delete_entry, list_entries, update_status, CalendarStatus, NewCalendarEntry,
};
use crate::errors::AppError;
use crate::models::calendar::CalendarEntryRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AddEntryRequest {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub status: CalendarStatus,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: CalendarStatus,
}

/// GET /api/v1/calendar
pub async fn handle_list_entries(
    State(state): State<AppState>,
) -> Result<Json<Vec<CalendarEntryRow>>, AppError> {
    Ok(Json(list_entries(&state.db).await?))
}

/// POST /api/v1/calendar
pub async fn handle_add_entry(
    State(state): State<AppState>,
    Json(req): Json<AddEntryRequest>,
) -> Result<(StatusCode, Json<CalendarEntryRow>), AppError> {
    let row = add_entry(
        &state.db,
        &NewCalendarEntry {
            title: &req.title,
            description: &req.description,
            date: req.date,
            status: req.status,
        },
    )
    .await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// PATCH /api/v1/calendar/:id/status
pub async fn handle_update_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<StatusUpdate>,
) -> Result<StatusCode, AppError> {
    update_status(&state.db, id, req.status).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/calendar/:id
pub async fn handle_delete_entry(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    delete_entry(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
