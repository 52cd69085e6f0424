use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of `/register` and `/login`: `{token}` on success, `{message}` (or the
/// gateway's `{error}`) otherwise
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl AuthResponse {
    /// Token, if the server issued a non-empty one
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    pub fn message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .or(self.error.as_deref())
            .filter(|m| !m.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_response_is_decoded() {
        let resp: AuthResponse = serde_json::from_str(r#"{"token":"abc.def"}"#).unwrap();
        assert_eq!(resp.token(), Some("abc.def"));
        assert_eq!(resp.message(), None);
    }

    #[test]
    fn empty_token_counts_as_missing() {
        let resp: AuthResponse = serde_json::from_str(r#"{"token":"","message":"User exists"}"#).unwrap();
        assert_eq!(resp.token(), None);
        assert_eq!(resp.message(), Some("User exists"));
    }

    #[test]
    fn gateway_error_field_is_a_message() {
        let resp: AuthResponse = serde_json::from_str(r#"{"error":"Invalid credentials"}"#).unwrap();
        assert_eq!(resp.message(), Some("Invalid credentials"));
    }
}
