use edtrack::config::jwt::JwtConfig;
use edtrack::modules::users::model::UserRole;
use edtrack::utils::jwt::{create_token, verify_token};
use uuid::Uuid;

fn get_test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        token_expiry: 604800,
    }
}

#[test]
fn test_create_token_success() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    let result = create_token(user_id, "test@example.com", UserRole::Student, "Test", &jwt_config);

    assert!(result.is_ok());
    assert!(!result.unwrap().is_empty());
}

#[test]
fn test_verify_token_round_trip() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    let token = create_token(
        user_id,
        "teacher@example.com",
        UserRole::Teacher,
        "Jane Doe",
        &jwt_config,
    )
    .unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert_eq!(claims.sub, user_id.to_string());
    assert_eq!(claims.email, "teacher@example.com");
    assert_eq!(claims.role, UserRole::Teacher);
    assert_eq!(claims.name, "Jane Doe");
}

#[test]
fn test_token_expiry_is_seven_days() {
    let jwt_config = get_test_jwt_config();
    let token = create_token(
        Uuid::new_v4(),
        "test@example.com",
        UserRole::Student,
        "Test",
        &jwt_config,
    )
    .unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert!(claims.exp > claims.iat);
    assert_eq!(claims.exp - claims.iat, jwt_config.token_expiry as usize);
}

#[test]
fn test_verify_token_rejects_tampered_token() {
    let jwt_config = get_test_jwt_config();
    let token = create_token(
        Uuid::new_v4(),
        "test@example.com",
        UserRole::Student,
        "Test",
        &jwt_config,
    )
    .unwrap();

    // Flip one character anywhere in the token and it must stop verifying.
    for position in [10, token.len() / 2, token.len() - 1] {
        let mut bytes = token.clone().into_bytes();
        bytes[position] = if bytes[position] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(bytes).unwrap();

        assert!(verify_token(&tampered, &jwt_config).is_err());
    }
}

#[test]
fn test_verify_token_wrong_secret() {
    let jwt_config = get_test_jwt_config();
    let token = create_token(
        Uuid::new_v4(),
        "test@example.com",
        UserRole::Student,
        "Test",
        &jwt_config,
    )
    .unwrap();

    let wrong_jwt_config = JwtConfig {
        secret: "different_secret_key".to_string(),
        token_expiry: 604800,
    };

    assert!(verify_token(&token, &wrong_jwt_config).is_err());
}

#[test]
fn test_verify_token_expired() {
    let jwt_config = JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        token_expiry: -3600,
    };
    let token = create_token(
        Uuid::new_v4(),
        "test@example.com",
        UserRole::Student,
        "Test",
        &jwt_config,
    )
    .unwrap();

    assert!(verify_token(&token, &jwt_config).is_err());
}

#[test]
fn test_verify_token_malformed() {
    let jwt_config = get_test_jwt_config();
    let malformed_tokens = vec![
        "",
        "not.enough.parts",
        "too.many.parts.here.extra",
        "!!!.invalid.chars",
        "header.payload.",
    ];

    for token in malformed_tokens {
        assert!(verify_token(token, &jwt_config).is_err());
    }
}

#[test]
fn test_different_users_different_tokens() {
    let jwt_config = get_test_jwt_config();
    let user_id1 = Uuid::new_v4();
    let user_id2 = Uuid::new_v4();

    let token1 = create_token(user_id1, "a@example.com", UserRole::Student, "A", &jwt_config)
        .unwrap();
    let token2 = create_token(user_id2, "b@example.com", UserRole::Student, "B", &jwt_config)
        .unwrap();

    assert_ne!(token1, token2);

    let claims1 = verify_token(&token1, &jwt_config).unwrap();
    let claims2 = verify_token(&token2, &jwt_config).unwrap();
    assert_eq!(claims1.sub, user_id1.to_string());
    assert_eq!(claims2.sub, user_id2.to_string());
}
