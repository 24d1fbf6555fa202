//! Slot calendar: maps wall-clock time to one of the fixed half-hour
//! draw slots, or rejects it as outside the submission window.

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::error::AppError;

/// The 27 half-hour slots of a draw day, in chronological order.
pub const SLOT_LABELS: [&str; 27] = [
    "10:00 AM", "10:30 AM", "11:00 AM", "11:30 AM", "12:00 PM", "12:30 PM",
    "01:00 PM", "01:30 PM", "02:00 PM", "02:30 PM", "03:00 PM", "03:30 PM",
    "04:00 PM", "04:30 PM", "05:00 PM", "05:30 PM", "06:00 PM", "06:30 PM",
    "07:00 PM", "07:30 PM", "08:00 PM", "08:30 PM", "09:00 PM", "09:30 PM",
    "10:00 PM", "10:30 PM", "11:00 PM",
];

lazy_static! {
    static ref SLOT_INDEX: HashMap<&'static str, usize> = SLOT_LABELS
        .iter()
        .enumerate()
        .map(|(i, label)| (*label, i))
        .collect();
}

/// Position of a label within [`SLOT_LABELS`], if it is one of them.
pub fn slot_index(label: &str) -> Option<usize> {
    SLOT_INDEX.get(label).copied()
}

/// A timestamp resolved to its canonical slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSlot {
    /// Calendar date of the draw day
    pub date: NaiveDate,
    /// Display form of the date (DD-MM-YYYY)
    pub date_label: String,
    /// One of the 27 fixed labels
    pub slot: &'static str,
}

/// Resolves local wall-clock time against the fixed slot grid.
///
/// Local time is UTC plus a fixed configured offset; the offset is the
/// only state, so the calendar is cheap to clone into the app state.
#[derive(Debug, Clone)]
pub struct SlotCalendar {
    offset: FixedOffset,
}

impl SlotCalendar {
    pub fn new(utc_offset_minutes: i32) -> Self {
        let offset = FixedOffset::east_opt(utc_offset_minutes * 60)
            .unwrap_or_else(|| FixedOffset::east_opt(0).unwrap());
        Self { offset }
    }

    /// Current wall-clock time in the calendar's local zone.
    pub fn now_local(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.offset).naive_local()
    }

    /// Map a local timestamp to its slot, or reject it.
    ///
    /// The submission window is 09:46 up to (not including) 23:15; the
    /// check runs on the raw timestamp, before rounding. Rounding then
    /// snaps to the nearest half hour, carrying minute >= 45 into the
    /// next hour.
    pub fn resolve_slot(&self, local: NaiveDateTime) -> Result<ResolvedSlot, AppError> {
        let minute_of_day = local.hour() * 60 + local.minute();
        if minute_of_day < 9 * 60 + 46 || minute_of_day >= 23 * 60 + 15 {
            return Err(AppError::Window(
                "Out of time! Please submit between 9:46 AM and 11:14 PM.".to_string(),
            ));
        }

        let rounded = round_to_slot(local);
        let label = rounded.format("%I:%M %p").to_string();

        let slot = SLOT_INDEX
            .get_key_value(label.as_str())
            .map(|(k, _)| *k)
            .ok_or_else(|| AppError::Validation("Invalid time slot!".to_string()))?;

        Ok(ResolvedSlot {
            date: rounded.date(),
            date_label: rounded.format("%d-%m-%Y").to_string(),
            slot,
        })
    }
}

/// Round a timestamp to the nearest half-hour mark: minute < 15 down to
/// :00, [15,45) to :30, >= 45 up to the next hour's :00. A rounded time
/// still in the 9 o'clock hour snaps to 10:00, the first slot.
fn round_to_slot(t: NaiveDateTime) -> NaiveDateTime {
    let minute = t.minute();
    let (mut rounded, minute) = if minute < 15 {
        (t, 0)
    } else if minute < 45 {
        (t, 30)
    } else {
        (t + chrono::Duration::hours(1), 0)
    };

    if rounded.hour() == 9 && minute < 46 {
        return rounded
            .date()
            .and_time(NaiveTime::from_hms_opt(10, 0, 0).unwrap());
    }

    rounded = rounded
        .date()
        .and_time(NaiveTime::from_hms_opt(rounded.hour(), minute, 0).unwrap());
    rounded
}
