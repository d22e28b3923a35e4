use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::users::model::{User, UserRole};
use crate::utils::errors::AppError;

pub struct UserService;

impl UserService {
    /// Insert a new user. Email uniqueness is checked explicitly first so
    /// the caller gets a clean validation error; the unique index still
    /// backstops races, mapped to the same error.
    #[instrument(skip(db, password_hash))]
    pub async fn create_user(
        db: &PgPool,
        email: &str,
        password_hash: &str,
        role: UserRole,
        name: &str,
    ) -> Result<User, AppError> {
        let existing = Self::find_by_email(db, email).await?;
        if existing.is_some() {
            return Err(AppError::bad_request("Email already registered"));
        }

        let user = sqlx::query_as::<_, User>(
            r#"INSERT INTO users (email, password, role, name)
               VALUES ($1, $2, $3, $4)
               RETURNING id, email, password, role, name, created_at"#,
        )
        .bind(email)
        .bind(password_hash)
        .bind(role)
        .bind(name)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return AppError::bad_request("Email already registered");
            }
            AppError::from(e)
        })?;

        Ok(user)
    }

    #[instrument(skip(db))]
    pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, password, role, name, created_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(db)
        .await?;

        Ok(user)
    }

    #[instrument(skip(db))]
    pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, password, role, name, created_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await?;

        Ok(user)
    }
}
