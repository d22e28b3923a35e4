use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{login, me, signup};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/me", get(me))
}
