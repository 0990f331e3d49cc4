use serde::Deserialize;

/// Kind-classified API failure. Callers decide policy by kind: only
/// `Unauthorized` may ever trigger a logout or a login redirect, a plain
/// network hiccup or 404 must not.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Could not reach the server. Check your connection and try again.")]
    Network(String),
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("Your session has expired. Please sign in again.")]
    Unauthorized,
    #[error("Unexpected response from the server.")]
    Parse(String),
    #[error("The request timed out. Please try again.")]
    Timeout,
}

impl ApiError {
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// Classify a non-2xx response from its status and JSON body. Error
    /// bodies carry a `message` field; fall back to the HTTP status text.
    pub fn from_status(status: u16, body_message: Option<String>, status_text: &str) -> Self {
        if status == 401 {
            return ApiError::Unauthorized;
        }
        let message = body_message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| status_text.to_string());
        ApiError::Http { status, message }
    }
}

/// JSON error body shape shared by the backend and the CMS
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_401_classifies_as_unauthorized() {
        let err = ApiError::from_status(401, Some("token expired".to_string()), "Unauthorized");
        assert!(err.is_auth());
    }

    #[test]
    fn other_statuses_are_not_auth_errors() {
        let err = ApiError::from_status(404, None, "Not Found");
        assert!(!err.is_auth());
        assert_eq!(
            err,
            ApiError::Http {
                status: 404,
                message: "Not Found".to_string()
            }
        );
    }

    #[test]
    fn body_message_wins_over_status_text() {
        let err = ApiError::from_status(422, Some("email already registered".to_string()), "Unprocessable Entity");
        assert_eq!(err.to_string(), "email already registered");
    }

    #[test]
    fn blank_body_message_falls_back_to_status_text() {
        let err = ApiError::from_status(500, Some("  ".to_string()), "Internal Server Error");
        assert_eq!(err.to_string(), "Internal Server Error");
    }
}
