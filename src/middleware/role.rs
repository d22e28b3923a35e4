//! Role gates layered on top of [`AuthUser`].
//!
//! Each extractor authenticates the request, then requires one specific
//! role. A mismatch is 403 with a message naming the required role, after
//! the original middleware's wording.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;

fn check_role(auth_user: &AuthUser, required: UserRole) -> Result<(), AppError> {
    if auth_user.0.role != required {
        return Err(AppError::forbidden(format!("{} role required", required)));
    }
    Ok(())
}

/// Authenticated caller with the `teacher` role.
#[derive(Debug, Clone)]
pub struct RequireTeacher(pub AuthUser);

impl FromRequestParts<AppState> for RequireTeacher {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;
        check_role(&auth_user, UserRole::Teacher)?;
        Ok(RequireTeacher(auth_user))
    }
}

/// Authenticated caller with the `student` role.
#[derive(Debug, Clone)]
pub struct RequireStudent(pub AuthUser);

impl FromRequestParts<AppState> for RequireStudent {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;
        check_role(&auth_user, UserRole::Student)?;
        Ok(RequireStudent(auth_user))
    }
}
