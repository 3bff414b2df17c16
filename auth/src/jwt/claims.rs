use serde::Deserialize;
use serde::Serialize;

/// JWT claims carried by access tokens.
///
/// The payload is a fixed structure: a token without `sub` or `exp` does not
/// deserialize and is treated as malformed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (identity identifier)
    pub sub: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// Create claims for a subject valid for `expiration_seconds` from `now`.
    ///
    /// # Arguments
    /// * `subject` - Unique identity identifier
    /// * `now` - Current Unix timestamp
    /// * `expiration_seconds` - Seconds until token expires
    ///
    /// # Returns
    /// Claims with sub, exp and iat set
    pub fn for_subject(subject: impl ToString, now: i64, expiration_seconds: i64) -> Self {
        Self {
            sub: subject.to_string(),
            exp: now.saturating_add(expiration_seconds),
            iat: now,
        }
    }

    /// Get the subject claim.
    pub fn subject(&self) -> &str {
        &self.sub
    }

    /// Check if token is expired.
    ///
    /// A token is only live while `exp` is strictly in the future.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp <= current_timestamp
    }
}
