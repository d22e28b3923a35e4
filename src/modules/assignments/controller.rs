use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::RequireTeacher;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{Assignment, AssignmentWithTeacher, CreateAssignmentRequest};
use super::service::AssignmentService;

/// Create an assignment owned by the calling teacher
#[utoipa::path(
    post,
    path = "/api/assignments",
    request_body = CreateAssignmentRequest,
    responses(
        (status = 201, description = "Assignment created", body = AssignmentWithTeacher),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing token", body = ErrorResponse),
        (status = 403, description = "Teacher role required", body = ErrorResponse)
    ),
    tag = "Assignments",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_assignment(
    State(state): State<AppState>,
    RequireTeacher(auth_user): RequireTeacher,
    ValidatedJson(dto): ValidatedJson<CreateAssignmentRequest>,
) -> Result<(StatusCode, Json<AssignmentWithTeacher>), AppError> {
    let created = AssignmentService::create_assignment(
        &state.db,
        &dto.title,
        &dto.description,
        dto.due_date,
        auth_user.id(),
    )
    .await?;

    // Echo the joined shape the read endpoints use.
    let assignment = AssignmentService::find_by_id(&state.db, created.id)
        .await?
        .ok_or_else(|| AppError::not_found("Assignment not found"))?;

    Ok((StatusCode::CREATED, Json(assignment)))
}

/// List assignments
///
/// Teachers see only assignments they authored; students see the global
/// list across all teachers with the owning teacher's name joined in.
#[utoipa::path(
    get,
    path = "/api/assignments",
    responses(
        (status = 200, description = "Teacher: own assignments. Student: all assignments with teacher_name", body = [AssignmentWithTeacher]),
        (status = 401, description = "Missing token", body = ErrorResponse),
        (status = 403, description = "Invalid token", body = ErrorResponse)
    ),
    tag = "Assignments",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn list_assignments(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Response, AppError> {
    match auth_user.0.role {
        UserRole::Teacher => {
            let assignments: Vec<Assignment> =
                AssignmentService::list_for_teacher(&state.db, auth_user.id()).await?;
            Ok(Json(assignments).into_response())
        }
        UserRole::Student => {
            let assignments = AssignmentService::list_all(&state.db).await?;
            Ok(Json(assignments).into_response())
        }
    }
}

/// Fetch one assignment with its teacher's name
#[utoipa::path(
    get,
    path = "/api/assignments/{id}",
    params(("id" = Uuid, Path, description = "Assignment ID")),
    responses(
        (status = 200, description = "Assignment details", body = AssignmentWithTeacher),
        (status = 401, description = "Missing token", body = ErrorResponse),
        (status = 403, description = "Invalid token", body = ErrorResponse),
        (status = 404, description = "Assignment not found", body = ErrorResponse)
    ),
    tag = "Assignments",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_assignment(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<AssignmentWithTeacher>, AppError> {
    let assignment = AssignmentService::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Assignment not found"))?;

    Ok(Json(assignment))
}
