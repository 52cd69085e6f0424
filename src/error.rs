// ============================================================================
// ERRORS - Failures of an API call, as seen by the client
// ============================================================================

use thiserror::Error;

use crate::utils::GENERIC_ERROR_MESSAGE;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("No session token, login required")]
    MissingToken,
}

impl ApiError {
    /// Text for the notification shown to the user
    pub fn user_message(&self) -> String {
        match self {
            Self::Http { message, .. } if !message.trim().is_empty() => message.clone(),
            Self::Http { .. } => GENERIC_ERROR_MESSAGE.to_string(),
            Self::Network(_) => "Could not reach the server, check your connection".to_string(),
            Self::Parse(_) => "Unexpected response from the server".to_string(),
            Self::Serialization(_) => GENERIC_ERROR_MESSAGE.to_string(),
            Self::MissingToken => "Please log in first".to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_shows_server_message() {
        let err = ApiError::Http { status: 400, message: "Invalid weight".into() };
        assert_eq!(err.user_message(), "Invalid weight");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn blank_http_message_uses_generic_text() {
        let err = ApiError::Http { status: 500, message: "  ".into() };
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn transport_errors_have_no_status() {
        let err = ApiError::Network("connection refused".into());
        assert_eq!(err.status(), None);
        assert!(!err.user_message().contains("refused"));
        assert_eq!(err.to_string(), "Network error: connection refused");
    }
}
