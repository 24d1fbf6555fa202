// src/lib.rs

use axum::{
    routing::{get, post},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use services::slot_calendar::SlotCalendar;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub calendar: SlotCalendar,
}

pub mod entities {
    pub mod prelude;
    pub mod draw_entries;
    pub mod number_set_history;
    pub mod number_sets;
    pub mod users;
}

pub mod services {
    pub mod auth;
    pub mod draw_store;
    pub mod number_set_store;
    pub mod slot_calendar;
}

pub mod handlers {
    pub mod auth;
    pub mod draw;
    pub mod number_set;
}

pub mod models {
    pub mod auth;
    pub mod draw;
    pub mod number_set;
    pub mod response;
}

pub mod error;

/// Build the application router. Shared between main and the
/// integration tests so both serve the same routes.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(hello))
        .route("/login", post(handlers::auth::login))
        .route("/submit_data", post(handlers::draw::submit_draw))
        .route("/latest_number", get(handlers::draw::latest_number))
        .route("/latest_dates", get(handlers::draw::latest_dates))
        .route("/get_data", get(handlers::draw::get_data))
        .route(
            "/submit_multiple_numbers",
            post(handlers::number_set::submit_multiple_numbers),
        )
        .route(
            "/latest36jodidata",
            get(handlers::number_set::latest_history),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn hello() -> &'static str {
    "Jackpot draw backend is up"
}
