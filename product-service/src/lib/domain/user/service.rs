use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use uuid::Uuid;

use crate::domain::user::models::AccessToken;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::domain::user::models::User;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
    token_expiration_seconds: i64,
    // Verified against when the email is unknown, so both login failures cost one hash check
    dummy_password_hash: String,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hashing and token signing
    /// * `token_expiration_seconds` - Lifetime of issued access tokens
    ///
    /// # Returns
    /// Configured user service instance
    ///
    /// # Errors
    /// * `PasswordHashing` - The configured hasher cannot produce a hash
    pub fn new(
        repository: Arc<UR>,
        authenticator: Arc<Authenticator>,
        token_expiration_seconds: i64,
    ) -> Result<Self, UserError> {
        let dummy_password_hash = authenticator.hash_password(&Uuid::new_v4().to_string())?;

        Ok(Self {
            repository,
            authenticator,
            token_expiration_seconds,
            dummy_password_hash,
        })
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        let user = User::register(
            command.name,
            command.email,
            &command.password,
            self.authenticator.password_hasher(),
        )?;

        let created_user = self.repository.create(user).await?;
        tracing::info!(user_id = %created_user.id, "User registered");

        Ok(created_user)
    }

    async fn get_user_by_email(&self, email: &EmailAddress) -> Result<User, UserError> {
        self.repository
            .find_by_email(email.as_str())
            .await?
            .ok_or_else(|| UserError::NotFoundByEmail(email.to_string()))
    }

    async fn login(&self, email: &str, password: &Password) -> Result<AccessToken, UserError> {
        // Unknown email and wrong password must be indistinguishable to the caller
        let Some(user) = self.repository.find_by_email(email).await? else {
            let _ = self
                .authenticator
                .password_hasher()
                .verify(password.expose(), &self.dummy_password_hash);
            tracing::debug!("Login rejected: unknown email");
            return Err(UserError::InvalidCredentials);
        };

        let result = self
            .authenticator
            .authenticate(
                password.expose(),
                user.password_hash.as_str(),
                user.id,
                self.token_expiration_seconds,
            )
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => {
                    tracing::debug!(user_id = %user.id, "Login rejected: password mismatch");
                    UserError::InvalidCredentials
                }
                other => UserError::TokenIssuance(other.to_string()),
            })?;

        tracing::info!(user_id = %user.id, "Access token issued");
        Ok(AccessToken(result.access_token))
    }
}
