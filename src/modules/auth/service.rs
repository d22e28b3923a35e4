use sqlx::PgPool;
use tracing::instrument;

use crate::config::jwt::JwtConfig;
use crate::modules::users::model::UserIdentity;
use crate::modules::users::service::UserService;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_token;
use crate::utils::password::{hash_password, verify_password};

use super::model::{AuthResponse, LoginRequest, SignupRequest};

pub struct AuthService;

impl AuthService {
    #[instrument(skip(db, dto, jwt_config))]
    pub async fn signup(
        db: &PgPool,
        dto: SignupRequest,
        jwt_config: &JwtConfig,
    ) -> Result<AuthResponse, AppError> {
        let password_hash = hash_password(&dto.password)?;

        let user =
            UserService::create_user(db, &dto.email, &password_hash, dto.role, &dto.name).await?;

        let token = create_token(user.id, &user.email, user.role, &user.name, jwt_config)?;

        Ok(AuthResponse {
            token,
            user: UserIdentity::from(user),
        })
    }

    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<AuthResponse, AppError> {
        let user = UserService::find_by_email(db, &dto.email)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid credentials"))?;

        let is_valid = verify_password(&dto.password, &user.password)?;
        if !is_valid {
            return Err(AppError::unauthorized("Invalid credentials"));
        }

        let token = create_token(user.id, &user.email, user.role, &user.name, jwt_config)?;

        Ok(AuthResponse {
            token,
            user: UserIdentity::from(user),
        })
    }
}
