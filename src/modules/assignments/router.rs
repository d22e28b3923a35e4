use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::submissions::controller::{
    get_my_submission, list_submissions, submit_assignment,
};
use crate::state::AppState;

use super::controller::{create_assignment, get_assignment, list_assignments};

pub fn init_assignments_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_assignment).get(list_assignments))
        .route("/{id}", get(get_assignment))
        .route("/{id}/submit", post(submit_assignment))
        .route("/{id}/submissions", get(list_submissions))
        .route("/{id}/my-submission", get(get_my_submission))
}
