//! Draw store: per-day records of slot values, one write per slot ever.
//!
//! Storage is one row per filled (day, slot). The fill itself is a
//! conflict-ignoring insert against the unique (draw_date, slot) index,
//! so two concurrent submissions for the same slot cannot both win.

use chrono::NaiveDate;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter, QueryOrder, QuerySelect,
    Set,
};

use crate::entities::{draw_entries, prelude::*};
use crate::error::AppError;
use crate::services::slot_calendar::{slot_index, ResolvedSlot, SLOT_LABELS};

/// A full day's record: one optional value per slot, in slot order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawDay {
    pub date: NaiveDate,
    pub date_label: String,
    pub values: Vec<Option<String>>,
}

impl DrawDay {
    fn empty(date: NaiveDate, date_label: String) -> Self {
        Self {
            date,
            date_label,
            values: vec![None; SLOT_LABELS.len()],
        }
    }
}

/// Validate a submitted draw number and render it as a two-digit string.
pub fn format_draw_value(number: &serde_json::Value) -> Result<String, AppError> {
    let n = number
        .as_i64()
        .filter(|n| (0..=99).contains(n))
        .ok_or_else(|| {
            AppError::Validation("Number must be an integer between 0 and 99!".to_string())
        })?;
    Ok(format!("{:02}", n))
}

/// Write `value` into the resolved slot. Fails with a conflict if the
/// slot already holds a value; the stored value is never overwritten.
pub async fn submit_value(
    db: &DatabaseConnection,
    resolved: &ResolvedSlot,
    value: &str,
) -> Result<(), AppError> {
    let entry = draw_entries::ActiveModel {
        draw_date: Set(resolved.date),
        date_label: Set(resolved.date_label.clone()),
        slot: Set(resolved.slot.to_string()),
        value: Set(value.to_string()),
        created_at: Set(Some(chrono::Utc::now().naive_utc())),
        ..Default::default()
    };

    let rows = DrawEntries::insert(entry)
        .on_conflict(
            OnConflict::columns([
                draw_entries::Column::DrawDate,
                draw_entries::Column::Slot,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(db)
        .await?;

    if rows == 0 {
        return Err(AppError::Conflict(
            "Number already selected, cannot update!".to_string(),
        ));
    }

    tracing::info!(
        "Stored draw value {} for {} at {}",
        value,
        resolved.date_label,
        resolved.slot
    );
    Ok(())
}

/// The full record for one date, or None if nothing was submitted that day.
pub async fn get_day(
    db: &DatabaseConnection,
    date: NaiveDate,
) -> Result<Option<DrawDay>, AppError> {
    let rows = DrawEntries::find()
        .filter(draw_entries::Column::DrawDate.eq(date))
        .all(db)
        .await?;

    Ok(assemble_day(date, rows))
}

/// Every stored day, oldest first.
pub async fn all_days(db: &DatabaseConnection) -> Result<Vec<DrawDay>, AppError> {
    let rows = DrawEntries::find()
        .order_by(draw_entries::Column::DrawDate, Order::Asc)
        .all(db)
        .await?;

    let mut days: Vec<DrawDay> = Vec::new();
    for row in rows {
        if days.last().map(|d| d.date) != Some(row.draw_date) {
            days.push(DrawDay::empty(row.draw_date, row.date_label.clone()));
        }
        place_row(days.last_mut().unwrap(), row);
    }
    Ok(days)
}

/// The `limit` most recent days by true calendar date, newest first.
pub async fn recent_days(
    db: &DatabaseConnection,
    limit: u64,
) -> Result<Vec<DrawDay>, AppError> {
    let dates: Vec<NaiveDate> = DrawEntries::find()
        .select_only()
        .column(draw_entries::Column::DrawDate)
        .distinct()
        .order_by(draw_entries::Column::DrawDate, Order::Desc)
        .limit(limit)
        .into_tuple()
        .all(db)
        .await?;

    let mut days = Vec::with_capacity(dates.len());
    for date in dates {
        if let Some(day) = get_day(db, date).await? {
            days.push(day);
        }
    }
    Ok(days)
}

/// Scan a day's slots in reverse chronological order and return the most
/// recent (label, value) pair, if any slot is filled.
pub fn latest_filled_slot(day: &DrawDay) -> Option<(&'static str, &str)> {
    SLOT_LABELS
        .iter()
        .enumerate()
        .rev()
        .find_map(|(i, label)| day.values[i].as_deref().map(|v| (*label, v)))
}

fn assemble_day(date: NaiveDate, rows: Vec<draw_entries::Model>) -> Option<DrawDay> {
    let first = rows.first()?;
    let mut day = DrawDay::empty(date, first.date_label.clone());
    for row in rows {
        place_row(&mut day, row);
    }
    Some(day)
}

fn place_row(day: &mut DrawDay, row: draw_entries::Model) {
    match slot_index(&row.slot) {
        Some(i) => day.values[i] = Some(row.value),
        // A label outside the fixed grid can only come from a schema
        // change; surface it in the logs instead of dropping silently.
        None => tracing::warn!("Ignoring row with unknown slot label '{}'", row.slot),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn day_with(filled: &[(usize, &str)]) -> DrawDay {
        let mut day = DrawDay::empty(
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            "15-01-2025".to_string(),
        );
        for (i, v) in filled {
            day.values[*i] = Some(v.to_string());
        }
        day
    }

    #[test]
    fn test_format_draw_value_pads_to_two_digits() {
        assert_eq!(format_draw_value(&json!(0)).unwrap(), "00");
        assert_eq!(format_draw_value(&json!(5)).unwrap(), "05");
        assert_eq!(format_draw_value(&json!(99)).unwrap(), "99");
    }

    #[test]
    fn test_format_draw_value_rejects_out_of_range() {
        assert!(format_draw_value(&json!(100)).is_err());
        assert!(format_draw_value(&json!(-1)).is_err());
    }

    #[test]
    fn test_format_draw_value_rejects_non_integers() {
        assert!(format_draw_value(&json!("5")).is_err());
        assert!(format_draw_value(&json!(5.5)).is_err());
        assert!(format_draw_value(&json!(true)).is_err());
        assert!(format_draw_value(&json!(null)).is_err());
    }

    #[test]
    fn test_latest_filled_slot_scans_backwards() {
        let day = day_with(&[(0, "11"), (5, "42"), (12, "07")]);
        assert_eq!(latest_filled_slot(&day), Some(("03:00 PM", "07")));
    }

    #[test]
    fn test_latest_filled_slot_last_slot_wins() {
        let day = day_with(&[(3, "20"), (26, "99")]);
        assert_eq!(latest_filled_slot(&day), Some(("11:00 PM", "99")));
    }

    #[test]
    fn test_latest_filled_slot_empty_day() {
        let day = day_with(&[]);
        assert_eq!(latest_filled_slot(&day), None);
    }
}
