use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use edtrack::config::cors::CorsConfig;
use edtrack::config::jwt::JwtConfig;
use edtrack::config::upload::UploadConfig;
use edtrack::modules::assignments::service::AssignmentService;
use edtrack::modules::users::model::UserRole;
use edtrack::modules::users::service::UserService;
use edtrack::router::init_router;
use edtrack::state::AppState;
use edtrack::utils::password::hash_password;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        token_expiry: 3600,
    }
}

pub fn setup_test_app(pool: PgPool) -> Router {
    let state = AppState {
        db: pool,
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
        upload_config: UploadConfig {
            dir: std::env::temp_dir().join("edtrack-test-uploads"),
        },
    };
    init_router(state)
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

#[allow(dead_code)]
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
}

/// Seed a user directly through the credential store.
pub async fn create_test_user(pool: &PgPool, role: UserRole, name: &str) -> TestUser {
    let email = generate_unique_email();
    let password = "testpass123".to_string();
    let hashed = hash_password(&password).unwrap();

    let user = UserService::create_user(pool, &email, &hashed, role, name)
        .await
        .unwrap();

    TestUser {
        id: user.id,
        email,
        password,
    }
}

#[allow(dead_code)]
pub async fn create_test_assignment(pool: &PgPool, teacher_id: Uuid, title: &str) -> Uuid {
    let due_date = chrono::Utc::now() + chrono::Duration::days(7);
    let assignment =
        AssignmentService::create_assignment(pool, title, "Test description", due_date, teacher_id)
            .await
            .unwrap();
    assignment.id
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, body)
}

pub async fn post_json(
    app: &Router,
    uri: &str,
    token: Option<&str>,
    body: &Value,
) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    let request = builder
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap();
    send(app, request).await
}

pub async fn get(app: &Router, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    let request = builder.body(Body::empty()).unwrap();
    send(app, request).await
}

/// Login through the API and return the issued token.
pub async fn login_token(app: &Router, email: &str, password: &str) -> String {
    let (status, body) = post_json(
        app,
        "/api/login",
        None,
        &json!({ "email": email, "password": password }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}
