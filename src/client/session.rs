//! Explicit admin session passed into the API client
//!
//! The client never reads the token store itself. Callers load the token
//! (from the config file, an env var, or a fresh login) and hand it over
//! as a [`Session`]. A missing token means requests go out without an
//! `Authorization` header.

use std::fmt;

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Admin session credentials attached to privileged requests
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// Session with no token; privileged calls are sent unauthenticated
    pub fn anonymous() -> Self {
        Self { token: None }
    }

    /// Session carrying a bearer token. Blank tokens are treated as absent;
    /// any other value is kept byte for byte.
    pub fn bearer(token: impl Into<String>) -> Self {
        let token = token.into();
        if token.trim().is_empty() {
            Self::anonymous()
        } else {
            Self { token: Some(token) }
        }
    }

    /// Build a session from an optional token
    pub fn from_token(token: Option<&str>) -> Self {
        token.map(Self::bearer).unwrap_or_default()
    }

    /// The raw token, if any
    #[allow(dead_code)]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Whether a token is present
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Value for the `Authorization` header, or `None` when no token is held
    pub fn authorization_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    /// Expiry read from the token's `exp` claim when the token is a JWT.
    ///
    /// The signature is not checked. Opaque tokens yield `None`.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        #[derive(Deserialize)]
        struct Claims {
            exp: i64,
        }

        let token = self.token.as_deref()?;
        let mut parts = token.split('.');
        let (_header, payload, _sig) = (parts.next()?, parts.next()?, parts.next()?);
        if parts.next().is_some() {
            return None;
        }

        let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
        let claims: Claims = serde_json::from_slice(&bytes).ok()?;
        DateTime::from_timestamp(claims.exp, 0)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
