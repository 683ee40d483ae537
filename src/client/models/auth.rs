//! Authentication models

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Admin login credentials, sent as the body of the authenticate request
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Field names the backend may use for the issued token
const TOKEN_FIELDS: &[&str] = &["token", "jwt", "accessToken", "access_token"];

/// Raw authenticate response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthResponse(pub Value);

impl AuthResponse {
    /// Session token carried by the response.
    ///
    /// Accepts a bare string body or an object with a common token field,
    /// optionally nested under `data`.
    pub fn token(&self) -> Option<&str> {
        fn find(value: &Value) -> Option<&str> {
            match value {
                Value::String(s) if !s.trim().is_empty() => Some(s.as_str()),
                Value::Object(map) => TOKEN_FIELDS
                    .iter()
                    .find_map(|k| map.get(*k).and_then(Value::as_str))
                    .or_else(|| map.get("data").and_then(find)),
                _ => None,
            }
        }
        find(&self.0)
    }
}

impl From<Value> for AuthResponse {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_credentials_body_shape() {
        let creds = Credentials::new("admin@joblink.io", "hunter2");
        let body = serde_json::to_value(&creds).unwrap();
        assert_eq!(body, json!({"email": "admin@joblink.io", "password": "hunter2"}));
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let creds = Credentials::new("admin@joblink.io", "hunter2");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("admin@joblink.io"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_token_from_object() {
        let resp = AuthResponse(json!({"token": "abc", "role": "ADMIN"}));
        assert_eq!(resp.token(), Some("abc"));

        let resp = AuthResponse(json!({"accessToken": "def"}));
        assert_eq!(resp.token(), Some("def"));
    }

    #[test]
    fn test_token_nested_under_data() {
        let resp = AuthResponse(json!({"data": {"jwt": "nested"}}));
        assert_eq!(resp.token(), Some("nested"));
    }

    #[test]
    fn test_token_bare_string() {
        let resp = AuthResponse(json!("eyJhbGciOi"));
        assert_eq!(resp.token(), Some("eyJhbGciOi"));
    }

    #[test]
    fn test_token_missing() {
        assert_eq!(AuthResponse(json!({"message": "ok"})).token(), None);
        assert_eq!(AuthResponse(Value::Null).token(), None);
        assert_eq!(AuthResponse(json!("   ")).token(), None);
    }
}
