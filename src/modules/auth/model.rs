use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::users::model::{UserIdentity, UserRole};

/// Identity token claims.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    pub email: String,
    pub role: UserRole,
    pub name: String,
    pub exp: usize,
    pub iat: usize,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SignupRequest {
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    pub role: UserRole,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Returned by both signup and login.
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserIdentity,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_signup_request_valid() {
        let dto = SignupRequest {
            email: "jane@example.com".to_string(),
            password: "secret123".to_string(),
            role: UserRole::Teacher,
            name: "Jane Doe".to_string(),
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_signup_request_rejects_empty_fields() {
        let dto = SignupRequest {
            email: "not-an-email".to_string(),
            password: "secret123".to_string(),
            role: UserRole::Student,
            name: "Jane".to_string(),
        };
        assert!(dto.validate().is_err());

        let dto = SignupRequest {
            email: "jane@example.com".to_string(),
            password: "".to_string(),
            role: UserRole::Student,
            name: "Jane".to_string(),
        };
        assert!(dto.validate().is_err());

        let dto = SignupRequest {
            email: "jane@example.com".to_string(),
            password: "secret123".to_string(),
            role: UserRole::Student,
            name: "".to_string(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_signup_request_rejects_unknown_role() {
        let json = r#"{"email":"a@b.com","password":"pw","role":"admin","name":"A"}"#;
        let result: Result<SignupRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_login_request_requires_password() {
        let dto = LoginRequest {
            email: "jane@example.com".to_string(),
            password: "".to_string(),
        };
        assert!(dto.validate().is_err());
    }
}
