//! Multi-number store: the single current ten-number record plus its
//! append-only submission history.

use chrono::NaiveDateTime;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, Order, QueryOrder, QuerySelect, Set,
};

use crate::entities::number_sets::CURRENT_SET_ID;
use crate::entities::{number_set_history, number_sets, prelude::*};
use crate::error::AppError;

/// How many numbers a submission must contain.
pub const SET_SIZE: usize = 10;

/// One history entry with the internal row id stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberSetEntry {
    pub numbers: Vec<String>,
    pub submitted_at: NaiveDateTime,
}

/// Split a raw comma-separated submission into exactly ten two-digit
/// strings. Tokens are trimmed; each must parse as an integer in [0,99].
pub fn parse_number_list(raw: &str) -> Result<Vec<String>, AppError> {
    let tokens: Vec<&str> = raw.split(',').collect();

    if tokens.len() != SET_SIZE {
        return Err(AppError::Validation(
            "You must provide exactly 10 numbers!".to_string(),
        ));
    }

    let mut formatted = Vec::with_capacity(SET_SIZE);
    for token in tokens {
        let trimmed = token.trim();
        let n: i64 = trimmed.parse().map_err(|_| {
            AppError::Validation(format!(
                "Invalid number '{}'! Numbers must be integers.",
                token
            ))
        })?;
        if !(0..=99).contains(&n) {
            return Err(AppError::Validation(format!(
                "Number {} is out of range! Must be between 00 and 99.",
                n
            )));
        }
        formatted.push(format!("{:02}", n));
    }

    Ok(formatted)
}

/// Replace the current record wholesale and append one history entry.
/// Returns true if a current record already existed (replace vs create).
pub async fn submit_numbers(
    db: &DatabaseConnection,
    numbers: &[String],
    submitted_at: NaiveDateTime,
) -> Result<bool, AppError> {
    let payload = serde_json::json!(numbers);
    let existed = NumberSets::find_by_id(CURRENT_SET_ID).one(db).await?.is_some();

    let current = number_sets::ActiveModel {
        id: Set(CURRENT_SET_ID),
        numbers: Set(payload.clone()),
        submitted_at: Set(submitted_at),
    };
    NumberSets::insert(current)
        .on_conflict(
            OnConflict::column(number_sets::Column::Id)
                .update_columns([
                    number_sets::Column::Numbers,
                    number_sets::Column::SubmittedAt,
                ])
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;

    let history = number_set_history::ActiveModel {
        numbers: Set(payload),
        submitted_at: Set(submitted_at),
        ..Default::default()
    };
    history.insert(db).await?;

    tracing::info!(
        "Multi-number record {} with {} numbers",
        if existed { "replaced" } else { "created" },
        numbers.len()
    );
    Ok(existed)
}

/// The single current record, if one has ever been submitted.
pub async fn current(db: &DatabaseConnection) -> Result<Option<NumberSetEntry>, AppError> {
    let row = NumberSets::find_by_id(CURRENT_SET_ID).one(db).await?;
    row.map(|r| entry_from(r.numbers, r.submitted_at)).transpose()
}

/// Up to `limit` newest history entries, newest first.
pub async fn history(
    db: &DatabaseConnection,
    limit: u64,
) -> Result<Vec<NumberSetEntry>, AppError> {
    let rows = NumberSetHistory::find()
        .order_by(number_set_history::Column::SubmittedAt, Order::Desc)
        .limit(limit)
        .all(db)
        .await?;

    rows.into_iter()
        .map(|r| entry_from(r.numbers, r.submitted_at))
        .collect()
}

fn entry_from(
    numbers: serde_json::Value,
    submitted_at: NaiveDateTime,
) -> Result<NumberSetEntry, AppError> {
    let numbers: Vec<String> = serde_json::from_value(numbers)
        .map_err(|e| AppError::Validation(format!("Corrupt number set in storage: {}", e)))?;
    Ok(NumberSetEntry {
        numbers,
        submitted_at,
    })
}
