//! Credential verification against stored salted hashes.
//!
//! Passwords are never stored or compared in plaintext: each user row
//! carries a random salt and an iterated SHA-256 hash of salt + password.

use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use sha2::{Digest, Sha256};

use crate::entities::{prelude::*, users};
use crate::error::AppError;

const HASH_ITERATIONS: u32 = 10_000;

/// Derive the hex-encoded hash for a password under the given salt.
pub fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    let mut digest = hasher.finalize();

    for _ in 1..HASH_ITERATIONS {
        let mut hasher = Sha256::new();
        hasher.update(&digest);
        digest = hasher.finalize();
    }

    hex::encode(digest)
}

/// Fresh random salt for a new user row.
pub fn generate_salt() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Check a username/password pair against the users table.
pub async fn verify_login(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
) -> Result<(), AppError> {
    let user = Users::find()
        .filter(users::Column::Username.eq(username))
        .one(db)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    if hash_password(password, &user.password_salt) != user.password_hash {
        return Err(AppError::InvalidCredentials);
    }

    tracing::info!("Login verified for user '{}'", username);
    Ok(())
}

/// Insert a new user row with a freshly salted hash. Used by the
/// add_user provisioning binary; the serving core never mutates users.
pub async fn create_user(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
) -> Result<users::Model, AppError> {
    let existing = Users::find()
        .filter(users::Column::Username.eq(username))
        .one(db)
        .await?;
    if existing.is_some() {
        return Err(AppError::Conflict(format!(
            "User '{}' already exists!",
            username
        )));
    }

    let salt = generate_salt();
    let user = users::ActiveModel {
        username: Set(username.to_string()),
        password_salt: Set(salt.clone()),
        password_hash: Set(hash_password(password, &salt)),
        created_at: Set(Some(chrono::Utc::now().naive_utc())),
        ..Default::default()
    };

    Ok(user.insert(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic_per_salt() {
        let a = hash_password("secret", "salt-1");
        let b = hash_password("secret", "salt-1");
        assert_eq!(a, b);
    }

    #[test]
    fn test_hash_differs_across_salts_and_passwords() {
        let base = hash_password("secret", "salt-1");
        assert_ne!(base, hash_password("secret", "salt-2"));
        assert_ne!(base, hash_password("other", "salt-1"));
    }

    #[test]
    fn test_hash_is_hex_sha256() {
        let h = hash_password("secret", "salt-1");
        assert_eq!(h.len(), 64);
        assert!(h.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_generated_salts_are_unique() {
        assert_ne!(generate_salt(), generate_salt());
    }
}
