use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::modules::users::model::UserIdentity;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

/// Extractor that authenticates the request and provides the caller's
/// current identity.
///
/// The status-code contract is deliberately asymmetric: a missing bearer
/// token is 401, a token that fails verification is 403, and a verified
/// token whose subject no longer resolves is 401 again (stale tokens must
/// not outlive account removal).
///
/// The token only proves which id was authenticated. Role and name are
/// re-read from the store on every request rather than trusted from the
/// token body.
#[derive(Debug, Clone)]
pub struct AuthUser(pub UserIdentity);

impl AuthUser {
    pub fn id(&self) -> uuid::Uuid {
        self.0.id
    }

    pub fn email(&self) -> &str {
        &self.0.email
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Access token required"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Access token required"))?;

        let claims = verify_token(token, &state.jwt_config)?;

        let user_id = claims
            .sub
            .parse::<uuid::Uuid>()
            .map_err(|_| AppError::unauthorized("Invalid token"))?;

        let user = UserService::find_by_id(&state.db, user_id)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid token"))?;

        Ok(AuthUser(user.into()))
    }
}
