use async_trait::async_trait;

use crate::domain::user::models::AccessToken;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `command` - Validated command containing name, email, and password
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `PasswordHashing` - Credential derivation failed
    /// * `DatabaseError` - Database operation failed
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError>;

    /// Retrieve user by email address.
    ///
    /// # Errors
    /// * `NotFoundByEmail` - No user with this email
    /// * `DatabaseError` - Database operation failed
    async fn get_user_by_email(&self, email: &EmailAddress) -> Result<User, UserError>;

    /// Exchange email and password for a signed access token.
    ///
    /// # Arguments
    /// * `email` - Login email as supplied by the client
    /// * `password` - Plaintext password as supplied by the client
    ///
    /// # Returns
    /// Access token valid for the configured lifetime
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (indistinguishable)
    /// * `TokenIssuance` - Token signing failed
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, email: &str, password: &Password) -> Result<AccessToken, UserError>;
}

/// Persistence operations for user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by email address.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
}
