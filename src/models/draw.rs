use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::services::draw_store::DrawDay;
use crate::services::slot_calendar::SLOT_LABELS;

/// Shown in place of an unfilled slot in display output. Storage keeps
/// the slot null; substitution happens at read time only.
pub const PENDING_PLACEHOLDER: &str = "wait...";

/// Body for POST /submit_data. The number is taken as raw JSON so that
/// non-integer payloads get the endpoint's validation message instead of
/// a deserialization error.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitDrawRequest {
    pub number: Option<Value>,
}

/// Response for GET /latest_number. draw_date/draw_time are omitted when
/// no slot is filled yet and latest_value carries the loading marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatestNumberResponse {
    pub latest_value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draw_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draw_time: Option<String>,
}

/// Response for GET /latest_dates: the two most recent daily records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatestDatesResponse {
    pub latest_date: Value,
    pub second_latest_date: Value,
}

/// Render a day's record as the wire object: a "Date" key plus one key
/// per slot label. Unfilled slots are null, or the pending placeholder
/// when `fill_placeholder` is set.
pub fn day_object(day: &DrawDay, fill_placeholder: bool) -> Value {
    let mut object = serde_json::Map::with_capacity(SLOT_LABELS.len() + 1);
    object.insert("Date".to_string(), Value::String(day.date_label.clone()));
    for (i, label) in SLOT_LABELS.iter().enumerate() {
        let value = match &day.values[i] {
            Some(v) => Value::String(v.clone()),
            None if fill_placeholder => Value::String(PENDING_PLACEHOLDER.to_string()),
            None => Value::Null,
        };
        object.insert(label.to_string(), value);
    }
    Value::Object(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_day() -> DrawDay {
        let mut values = vec![None; SLOT_LABELS.len()];
        values[0] = Some("07".to_string());
        values[26] = Some("42".to_string());
        DrawDay {
            date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            date_label: "15-01-2025".to_string(),
            values,
        }
    }

    #[test]
    fn test_day_object_has_date_and_all_slots() {
        let obj = day_object(&sample_day(), false);
        assert_eq!(obj["Date"], "15-01-2025");
        assert_eq!(obj.as_object().unwrap().len(), SLOT_LABELS.len() + 1);
        assert_eq!(obj["10:00 AM"], "07");
        assert_eq!(obj["11:00 PM"], "42");
        assert!(obj["10:30 AM"].is_null());
    }

    #[test]
    fn test_day_object_placeholder_substitution() {
        let obj = day_object(&sample_day(), true);
        assert_eq!(obj["10:30 AM"], PENDING_PLACEHOLDER);
        // filled slots keep their stored value
        assert_eq!(obj["10:00 AM"], "07");
    }
}
