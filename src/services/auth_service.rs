use crate::models::{LoginRequest, LoginResponse};
use crate::services::api_client::ApiClient;
use crate::services::error::ApiError;

/// Authenticate against the backend. On success the caller hands the
/// user/token pair to the session service, which persists it.
pub async fn login(api: &ApiClient, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    log::info!("🔐 Signing in {}", email);
    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    let response: LoginResponse = api.post_json("/v1/auth/login", &request, None).await?;
    log::info!("✅ Signed in as {}", response.user.display_name());
    Ok(response)
}
