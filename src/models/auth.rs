use serde::{Deserialize, Serialize};

use super::user::User;

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful authentication response from the backend. The token is an
/// opaque bearer credential; the session layer decides how to persist it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub user: User,
    pub token: String,
}
