use sea_orm::{DatabaseConnection, DbErr, EntityTrait};
use sea_orm_migration::MigratorTrait;
use std::env;

use jackpot_backend::entities::prelude::*;
use jackpot_backend::services::slot_calendar::SlotCalendar;
use jackpot_backend::AppState;

/// Set up test database connection and bring the schema up to date.
/// Uses TEST_DATABASE_URL environment variable or falls back to default.
pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    let database_url = env::var("TEST_DATABASE_URL").unwrap_or_else(|_| {
        "postgresql://jackpot_user@localhost:5432/jackpot_test".to_string()
    });

    let db = sea_orm::Database::connect(&database_url).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// App state over the test database, with the default +05:30 calendar.
pub async fn setup_test_state() -> AppState {
    let db = setup_test_db().await.expect("Failed to connect to test DB");
    AppState {
        db,
        calendar: SlotCalendar::new(330),
    }
}

/// Wipe every table this crate owns so a test starts from empty.
pub async fn clear_all_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    DrawEntries::delete_many().exec(db).await?;
    NumberSetHistory::delete_many().exec(db).await?;
    NumberSets::delete_many().exec(db).await?;
    Users::delete_many().exec(db).await?;
    Ok(())
}
