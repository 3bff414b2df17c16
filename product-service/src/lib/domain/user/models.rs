use std::fmt;

use auth::PasswordHasher;
use uuid::Uuid;

use crate::user::errors::UserError;
use crate::user::errors::UserIdError;
use crate::user::errors::UserValidationError;

/// User aggregate entity.
///
/// Represents a registered user. The stored credential is a one-way hash;
/// the plaintext password never outlives registration or login.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: UserName,
    pub email: EmailAddress,
    pub password_hash: PasswordHash,
}

impl User {
    /// Register a new user from validated fields.
    ///
    /// Generates a fresh identifier and derives the stored credential from
    /// the plaintext password.
    ///
    /// # Arguments
    /// * `name` - Validated display name
    /// * `email` - Validated email address
    /// * `password` - Plaintext password
    /// * `hasher` - Password hasher producing the credential
    ///
    /// # Returns
    /// New user entity (not yet persisted)
    ///
    /// # Errors
    /// * `PasswordHashing` - Hashing operation failed
    pub fn register(
        name: UserName,
        email: EmailAddress,
        password: &Password,
        hasher: &PasswordHasher,
    ) -> Result<Self, UserError> {
        let password_hash = PasswordHash(hasher.hash(password.expose())?);

        Ok(Self {
            id: UserId::new(),
            name,
            email,
            password_hash,
        })
    }
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    ///
    /// # Returns
    /// UserId with random UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Arguments
    /// * `s` - UUID string to parse
    ///
    /// # Returns
    /// Parsed UserId
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Display name value type. Must not be blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    /// Create a new valid user name.
    ///
    /// # Errors
    /// * `EmptyName` - Name is empty or whitespace
    pub fn new(name: String) -> Result<Self, UserValidationError> {
        if name.trim().is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Used as the login lookup key. Uniqueness is enforced by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new email address.
    ///
    /// # Errors
    /// * `EmptyEmail` - Email is empty or whitespace
    pub fn new(email: String) -> Result<Self, UserValidationError> {
        if email.trim().is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        Ok(Self(email))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext password supplied by a client.
///
/// Only readable through `expose`; debug output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Wrap a plaintext password.
    ///
    /// # Errors
    /// * `EmptyPassword` - Password is empty
    pub fn new(password: String) -> Result<Self, UserValidationError> {
        if password.is_empty() {
            return Err(UserValidationError::EmptyPassword);
        }
        Ok(Self(password))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password([REDACTED])")
    }
}

/// Stored one-way credential (Argon2id PHC string).
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap a credential loaded from storage.
    pub fn from_stored(hash: String) -> Self {
        Self(hash)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash([REDACTED])")
    }
}

/// Command to create a new user with domain types
#[derive(Debug)]
pub struct CreateUserCommand {
    pub name: UserName,
    pub email: EmailAddress,
    pub password: Password,
}

impl CreateUserCommand {
    /// Validate raw registration input.
    ///
    /// Fields are checked in order: name, email, password.
    ///
    /// # Errors
    /// * `EmptyName`, `EmptyEmail`, `EmptyPassword`
    pub fn new(name: String, email: String, password: String) -> Result<Self, UserValidationError> {
        Ok(Self {
            name: UserName::new(name)?,
            email: EmailAddress::new(email)?,
            password: Password::new(password)?,
        })
    }
}

/// Signed bearer token returned by a successful login.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(pub String);

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken([REDACTED])")
    }
}
