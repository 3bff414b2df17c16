//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure for services:
//! - Password hashing (Argon2id)
//! - JWT token generation and validation
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("other_password", &hash));
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!").unwrap();
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate a token valid for one hour
//! let result = auth.authenticate("password123", &hash, "user123", 3600).unwrap();
//!
//! // Validate token on every protected request
//! let claims = auth.validate_token(Some(result.access_token.as_str())).unwrap();
//! assert_eq!(claims.subject(), "user123");
//! ```

pub mod authenticator;
pub mod clock;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use clock::Clock;
pub use clock::SystemClock;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
