// src/bin/add_user.rs

use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use std::env;

use jackpot_backend::services::auth;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Usage: cargo run --bin add_user -- <username> <password>
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <username> <password>", args[0]);
        std::process::exit(1);
    }

    let username = &args[1];
    let password = &args[2];
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let db = Database::connect(&database_url).await?;
    migration::Migrator::up(&db, None).await?;

    match auth::create_user(&db, username, password).await {
        Ok(user) => {
            println!("Created user '{}' (id {})", user.username, user.id);
        }
        Err(e) => {
            eprintln!("Failed to create user '{}': {}", username, e);
            std::process::exit(1);
        }
    }

    Ok(())
}
