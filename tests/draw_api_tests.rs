mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use serde_json::{json, Value};
use tower::ServiceExt;

use jackpot_backend::router;
use jackpot_backend::services::draw_store;
use jackpot_backend::services::slot_calendar::ResolvedSlot;

use crate::common::{clear_all_tables, setup_test_state};

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

fn resolved(date: NaiveDate, slot: &'static str) -> ResolvedSlot {
    ResolvedSlot {
        date,
        date_label: date.format("%d-%m-%Y").to_string(),
        slot,
    }
}

/// Full lifecycle over the draw endpoints: empty-store 404s, the
/// write-once slot invariant, true-calendar-date ordering, reverse-scan
/// latest value, and the read-time placeholder substitution.
#[tokio::test]
async fn test_draw_lifecycle() {
    let state = setup_test_state().await;
    clear_all_tables(&state.db).await.unwrap();
    let app = || router(state.clone());

    // Empty store: both read endpoints report no records
    let (status, _) = get_json(app(), "/latest_number").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = get_json(app(), "/latest_dates").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No records found.");

    let (status, body) = get_json(app(), "/get_data").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 0);

    // Number validation runs before any clock or storage access, so
    // these rejections are deterministic regardless of wall-clock time
    for bad in [json!({"number": "5"}), json!({"number": 200}), json!({})] {
        let (status, body) = post_json(app(), "/submit_data", bad).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Number must be an integer between 0 and 99!");
    }

    // Fill a slot on 01-01-2025, then try to fill it again
    let jan_first = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let slot = resolved(jan_first, "10:30 AM");
    draw_store::submit_value(&state.db, &slot, "11")
        .await
        .unwrap();

    let err = draw_store::submit_value(&state.db, &slot, "22")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Number already selected, cannot update!");

    // The stored value is unchanged after the rejected write
    let day = draw_store::get_day(&state.db, jan_first)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(day.values[1].as_deref(), Some("11"));

    // A later day in the same month: string sort would put 01-01 after
    // 15-01 reversed, calendar order must not
    let jan_mid = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    draw_store::submit_value(&state.db, &resolved(jan_mid, "10:00 AM"), "42")
        .await
        .unwrap();
    draw_store::submit_value(&state.db, &resolved(jan_mid, "03:00 PM"), "07")
        .await
        .unwrap();

    // Latest number comes from 15-01-2025, scanning slots backwards
    let (status, body) = get_json(app(), "/latest_number").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["latest_value"], "07");
    assert_eq!(body["draw_date"], "15-01-2025");
    assert_eq!(body["draw_time"], "03:00 PM");

    // Latest two dates in true calendar order
    let (status, body) = get_json(app(), "/latest_dates").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["latest_date"]["Date"], "15-01-2025");
    assert_eq!(body["second_latest_date"]["Date"], "01-01-2025");
    // latest_dates keeps unfilled slots null, no placeholder
    assert!(body["latest_date"]["10:30 AM"].is_null());

    // get_data returns all days ascending with placeholder substitution
    let (status, body) = get_json(app(), "/get_data").await;
    assert_eq!(status, StatusCode::OK);
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["Date"], "01-01-2025");
    assert_eq!(records[1]["Date"], "15-01-2025");
    assert_eq!(records[0]["10:30 AM"], "11");
    assert_eq!(records[1]["03:00 PM"], "07");

    let waits = records[1]
        .as_object()
        .unwrap()
        .values()
        .filter(|v| *v == "wait...")
        .count();
    assert_eq!(waits, 25); // 27 slots, 2 filled
}
