use std::sync::Arc;

use crate::clock::Clock;
use crate::clock::SystemClock;
use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and JWT generation.
///
/// Provides high-level authentication operations by coordinating
/// password hashing and JWT token handling. All state is fixed at
/// construction, so one instance can be shared across requests.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    clock: Arc<dyn Clock>,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// JWT access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Missing token")]
    Missing,

    #[error("Malformed token: {0}")]
    Malformed(String),

    #[error("Token signature is invalid")]
    BadSignature,

    #[error("Token is expired")]
    Expired,

    #[error("Password error: {0}")]
    Password(String),

    #[error("Token issuance failed: {0}")]
    TokenIssuance(String),
}

impl From<JwtError> for AuthenticationError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::Malformed(reason) => AuthenticationError::Malformed(reason),
            JwtError::BadSignature => AuthenticationError::BadSignature,
            JwtError::MissingSigningKey | JwtError::EncodingFailed(_) => {
                AuthenticationError::TokenIssuance(err.to_string())
            }
        }
    }
}

impl From<PasswordError> for AuthenticationError {
    fn from(err: PasswordError) -> Self {
        AuthenticationError::Password(err.to_string())
    }
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for JWT signing
    ///
    /// # Returns
    /// Authenticator with default password hashing and the system clock
    ///
    /// # Errors
    /// * `MissingSigningKey` - Secret is empty
    pub fn new(jwt_secret: &[u8]) -> Result<Self, JwtError> {
        Ok(Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(jwt_secret)?,
            clock: Arc::new(SystemClock),
        })
    }

    /// Replace the password hasher (e.g. with tuned cost parameters).
    pub fn with_password_hasher(mut self, password_hasher: PasswordHasher) -> Self {
        self.password_hasher = password_hasher;
        self
    }

    /// Replace the time source used for issuing and validating tokens.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Password hasher used for new credentials.
    pub fn password_hasher(&self) -> &PasswordHasher {
        &self.password_hasher
    }

    /// Hash a password for storage.
    ///
    /// # Arguments
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// Hashed password string
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and generate JWT token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Identity the token is issued for
    /// * `expiration_seconds` - Token lifetime
    ///
    /// # Returns
    /// AuthenticationResult with access token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match or hash is unreadable
    /// * `TokenIssuance` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: impl ToString,
        expiration_seconds: i64,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.issue_token(subject, expiration_seconds)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Issue a signed token for a subject without password verification.
    ///
    /// # Arguments
    /// * `subject` - Identity the token is issued for
    /// * `expiration_seconds` - Token lifetime
    ///
    /// # Returns
    /// JWT token string
    ///
    /// # Errors
    /// * `TokenIssuance` - Token generation failed
    pub fn issue_token(
        &self,
        subject: impl ToString,
        expiration_seconds: i64,
    ) -> Result<String, AuthenticationError> {
        let claims = Claims::for_subject(subject, self.clock.now(), expiration_seconds);
        Ok(self.jwt_handler.encode(&claims)?)
    }

    /// Validate a raw bearer token.
    ///
    /// Checks presence, structure, signature and expiry, in that order.
    ///
    /// # Arguments
    /// * `token` - Raw token, `None` when the request carried none
    ///
    /// # Returns
    /// Verified claims
    ///
    /// # Errors
    /// * `Missing` - No token or an empty token
    /// * `Malformed` - Token cannot be parsed
    /// * `BadSignature` - Signature verification failed
    /// * `Expired` - `exp` is not strictly in the future
    pub fn validate_token(&self, token: Option<&str>) -> Result<Claims, AuthenticationError> {
        let token = token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(AuthenticationError::Missing)?;

        let claims: Claims = self.jwt_handler.decode(token)?;

        if claims.is_expired(self.clock.now()) {
            return Err(AuthenticationError::Expired);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicI64;
    use std::sync::atomic::Ordering;

    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    struct ManualClock(AtomicI64);

    impl ManualClock {
        fn at(now: i64) -> Arc<Self> {
            Arc::new(Self(AtomicI64::new(now)))
        }

        fn set(&self, now: i64) {
            self.0.store(now, Ordering::SeqCst);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> i64 {
            self.0.load(Ordering::SeqCst)
        }
    }

    fn authenticator_at(clock: Arc<ManualClock>) -> Authenticator {
        Authenticator::new(SECRET)
            .expect("Valid secret")
            .with_clock(clock)
    }

    #[test]
    fn test_authenticate_success() {
        let authenticator = Authenticator::new(SECRET).unwrap();

        let password = "my_password";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        let result = authenticator
            .authenticate(password, &hash, "user123", 3600)
            .expect("Authentication failed");

        assert!(!result.access_token.is_empty());

        let claims = authenticator
            .validate_token(Some(result.access_token.as_str()))
            .expect("Token validation failed");
        assert_eq!(claims.subject(), "user123");
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = Authenticator::new(SECRET).unwrap();

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let result = authenticator.authenticate("wrong_password", &hash, "user123", 3600);
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_malformed_stored_hash() {
        let authenticator = Authenticator::new(SECRET).unwrap();

        let result = authenticator.authenticate("my_password", "not-a-hash", "user123", 3600);
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_token_accepted_until_expiry() {
        let clock = ManualClock::at(1_700_000_000);
        let authenticator = authenticator_at(Arc::clone(&clock));

        let token = authenticator.issue_token("user123", 60).unwrap();

        clock.set(1_700_000_000 + 60 - 1);
        assert!(authenticator.validate_token(Some(token.as_str())).is_ok());

        clock.set(1_700_000_000 + 60);
        assert_eq!(
            authenticator.validate_token(Some(token.as_str())),
            Err(AuthenticationError::Expired)
        );

        clock.set(1_700_000_000 + 60 + 1);
        assert_eq!(
            authenticator.validate_token(Some(token.as_str())),
            Err(AuthenticationError::Expired)
        );
    }

    #[test]
    fn test_token_from_other_secret_rejected() {
        let clock = ManualClock::at(1_700_000_000);
        let issuer = Authenticator::new(b"another_secret_key_at_least_32_bytes")
            .unwrap()
            .with_clock(clock.clone());
        let authenticator = authenticator_at(clock);

        let token = issuer.issue_token("user123", 3600).unwrap();

        assert_eq!(
            authenticator.validate_token(Some(token.as_str())),
            Err(AuthenticationError::BadSignature)
        );
    }

    #[test]
    fn test_bad_signature_checked_before_expiry() {
        let clock = ManualClock::at(1_700_000_000);
        let issuer = Authenticator::new(b"another_secret_key_at_least_32_bytes")
            .unwrap()
            .with_clock(clock.clone());
        let authenticator = authenticator_at(Arc::clone(&clock));

        let token = issuer.issue_token("user123", 10).unwrap();
        clock.set(1_800_000_000);

        assert_eq!(
            authenticator.validate_token(Some(token.as_str())),
            Err(AuthenticationError::BadSignature)
        );
    }

    #[test]
    fn test_validate_missing_token() {
        let authenticator = Authenticator::new(SECRET).unwrap();

        assert_eq!(
            authenticator.validate_token(None),
            Err(AuthenticationError::Missing)
        );
        assert_eq!(
            authenticator.validate_token(Some("")),
            Err(AuthenticationError::Missing)
        );
        assert_eq!(
            authenticator.validate_token(Some("   ")),
            Err(AuthenticationError::Missing)
        );
    }

    #[test]
    fn test_validate_malformed_token() {
        let authenticator = Authenticator::new(SECRET).unwrap();

        let result = authenticator.validate_token(Some("garbage-string"));
        assert!(matches!(result, Err(AuthenticationError::Malformed(_))));

        let result = authenticator.validate_token(Some("invalid.token.here"));
        assert!(matches!(result, Err(AuthenticationError::Malformed(_))));
    }

    #[test]
    fn test_missing_secret_refused() {
        assert!(matches!(
            Authenticator::new(b""),
            Err(JwtError::MissingSigningKey)
        ));
    }
}
