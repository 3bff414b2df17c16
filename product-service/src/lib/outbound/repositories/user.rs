use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::PasswordHash;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserName;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: PgRow) -> Result<User, UserError> {
        let read = |e: sqlx::Error| UserError::DatabaseError(e.to_string());

        Ok(User {
            id: UserId(row.try_get("id").map_err(read)?),
            name: UserName::new(row.try_get("name").map_err(read)?)?,
            email: EmailAddress::new(row.try_get("email").map_err(read)?)?,
            password_hash: PasswordHash::from_stored(row.try_get("password_hash").map_err(read)?),
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, password_hash)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user.id.0)
        .bind(user.name.as_str())
        .bind(user.email.as_str())
        .bind(user.password_hash.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() && db_err.constraint() == Some("users_email_key") {
                    return UserError::EmailAlreadyExists(user.email.as_str().to_string());
                }
            }
            UserError::DatabaseError(e.to_string())
        })?;

        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, password_hash
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        row.map(Self::row_to_user).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, password_hash
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        row.map(Self::row_to_user).transpose()
    }
}
