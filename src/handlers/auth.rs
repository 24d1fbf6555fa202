use axum::{extract::State, Json};

use crate::{
    error::AppError,
    models::auth::{LoginRequest, LoginResponse},
    services::auth,
    AppState,
};

/// Handler for POST /login
/// Verifies a username/password pair against the stored credentials.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let username = body.username.as_deref().unwrap_or("");
    let password = body.password.as_deref().unwrap_or("");

    if username.is_empty() || password.is_empty() {
        return Err(AppError::Validation(
            "Username and password are required!".to_string(),
        ));
    }

    tracing::info!("Login attempt for user '{}'", username);
    auth::verify_login(&state.db, username, password).await?;

    Ok(Json(LoginResponse {
        message: "Login successful!".to_string(),
    }))
}
