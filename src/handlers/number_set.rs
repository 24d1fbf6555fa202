use axum::{extract::State, Json};

use crate::{
    error::AppError,
    models::number_set::{NumberSetEntryResponse, SubmitNumbersRequest, SubmitNumbersResponse},
    services::number_set_store,
    AppState,
};

/// How many history entries the latest36jodidata endpoint returns at most.
const HISTORY_LIMIT: u64 = 36;

/// Handler for POST /submit_multiple_numbers
/// Replaces the current ten-number record and appends a history entry.
pub async fn submit_multiple_numbers(
    State(state): State<AppState>,
    Json(body): Json<SubmitNumbersRequest>,
) -> Result<Json<SubmitNumbersResponse>, AppError> {
    let raw = body.numbers.unwrap_or_default();
    if raw.is_empty() {
        return Err(AppError::Validation(
            "Numbers must be provided in a comma-separated format!".to_string(),
        ));
    }

    let numbers = number_set_store::parse_number_list(&raw)?;
    let submitted_at = state.calendar.now_local();

    let existed = number_set_store::submit_numbers(&state.db, &numbers, submitted_at).await?;
    let message = if existed {
        "Numbers updated successfully!"
    } else {
        "Numbers inserted successfully!"
    };

    Ok(Json(SubmitNumbersResponse {
        message: message.to_string(),
        submitted_numbers: numbers,
    }))
}

/// Handler for GET /latest36jodidata
/// Returns the newest multi-number history entries, newest first.
pub async fn latest_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<NumberSetEntryResponse>>, AppError> {
    let entries = number_set_store::history(&state.db, HISTORY_LIMIT).await?;

    if entries.is_empty() {
        return Err(AppError::NotFound("No records found.".to_string()));
    }

    Ok(Json(entries.into_iter().map(Into::into).collect()))
}
