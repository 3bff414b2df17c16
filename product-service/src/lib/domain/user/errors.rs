use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for user field validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserValidationError {
    #[error("name is required")]
    EmptyName,

    #[error("email is required")]
    EmptyEmail,

    #[error("password is required")]
    EmptyPassword,
}

/// Top-level error for all user-related operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    #[error("Invalid user: {0}")]
    Validation(#[from] UserValidationError),

    // Domain-level errors
    #[error("User not found with email: {0}")]
    NotFoundByEmail(String),

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password hashing failed: {0}")]
    PasswordHashing(String),

    #[error("Token issuance failed: {0}")]
    TokenIssuance(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<auth::PasswordError> for UserError {
    fn from(err: auth::PasswordError) -> Self {
        UserError::PasswordHashing(err.to_string())
    }
}
