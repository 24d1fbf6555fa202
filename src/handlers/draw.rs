use axum::{extract::State, Json};
use serde_json::Value;

use crate::{
    error::AppError,
    models::{
        draw::{day_object, LatestDatesResponse, LatestNumberResponse, SubmitDrawRequest},
        response::MessageResponse,
    },
    services::draw_store,
    AppState,
};

/// Handler for POST /submit_data
/// Records a draw number into the current half-hour slot of today's record.
pub async fn submit_draw(
    State(state): State<AppState>,
    Json(body): Json<SubmitDrawRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let number = body.number.unwrap_or(Value::Null);
    let value = draw_store::format_draw_value(&number)?;

    let now = state.calendar.now_local();
    let resolved = state.calendar.resolve_slot(now)?;
    tracing::debug!("Resolved {} to slot {}", now, resolved.slot);

    draw_store::submit_value(&state.db, &resolved, &value).await?;

    Ok(Json(MessageResponse {
        message: "Data submitted successfully!".to_string(),
    }))
}

/// Handler for GET /latest_number
/// Returns the most recently filled slot of the most recent draw day.
pub async fn latest_number(
    State(state): State<AppState>,
) -> Result<Json<LatestNumberResponse>, AppError> {
    let days = draw_store::recent_days(&state.db, 1).await?;
    let day = days
        .first()
        .ok_or_else(|| AppError::NotFound("No records found.".to_string()))?;

    let response = match draw_store::latest_filled_slot(day) {
        Some((slot, value)) => LatestNumberResponse {
            latest_value: value.to_string(),
            draw_date: Some(day.date_label.clone()),
            draw_time: Some(slot.to_string()),
        },
        // Record exists but no slot is filled yet today
        None => LatestNumberResponse {
            latest_value: "Loading...".to_string(),
            draw_date: None,
            draw_time: None,
        },
    };

    Ok(Json(response))
}

/// Handler for GET /latest_dates
/// Returns the two most recent daily records by true calendar date.
pub async fn latest_dates(
    State(state): State<AppState>,
) -> Result<Json<LatestDatesResponse>, AppError> {
    let days = draw_store::recent_days(&state.db, 2).await?;

    if days.is_empty() {
        return Err(AppError::NotFound("No records found.".to_string()));
    }

    Ok(Json(LatestDatesResponse {
        latest_date: day_object(&days[0], false),
        second_latest_date: days
            .get(1)
            .map(|d| day_object(d, false))
            .unwrap_or(Value::Null),
    }))
}

/// Handler for GET /get_data
/// Returns every daily record with unfilled slots shown as "wait...".
pub async fn get_data(State(state): State<AppState>) -> Result<Json<Vec<Value>>, AppError> {
    let days = draw_store::all_days(&state.db).await?;
    let records = days.iter().map(|d| day_object(d, true)).collect();
    Ok(Json(records))
}
