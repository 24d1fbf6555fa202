use serde::{Deserialize, Serialize};

/// Body for POST /login. Fields are optional so that a missing one
/// produces the endpoint's own 400 message, not a deserialization error.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
}
