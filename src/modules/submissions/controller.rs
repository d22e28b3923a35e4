use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::role::{RequireStudent, RequireTeacher};
use crate::modules::assignments::service::AssignmentService;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::upload::store_upload;

use super::model::{
    Submission, SubmissionWithStudent, SubmitForm, SubmitResponse, UploadedFile,
};
use super::service::SubmissionService;

async fn read_submit_form(mut multipart: Multipart) -> Result<SubmitForm, AppError> {
    let mut form = SubmitForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| AppError::bad_request("Invalid multipart request body"))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "content" => {
                let text = field
                    .text()
                    .await
                    .map_err(|_| AppError::bad_request("Invalid multipart request body"))?;
                form.content = Some(text);
            }
            "file" => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|_| AppError::bad_request("Invalid multipart request body"))?;
                form.file = Some(UploadedFile {
                    filename,
                    data: data.to_vec(),
                });
            }
            // Unknown fields are ignored.
            _ => {}
        }
    }

    Ok(form)
}

/// Submit (or resubmit) a response to an assignment
///
/// Accepts `multipart/form-data` with a required `content` text field and
/// an optional `file` field. Resubmitting replaces the previous submission
/// and discards any grade it carried.
#[utoipa::path(
    post,
    path = "/api/assignments/{id}/submit",
    params(("id" = Uuid, Path, description = "Assignment ID")),
    responses(
        (status = 201, description = "Submission stored", body = SubmitResponse),
        (status = 400, description = "Missing content", body = ErrorResponse),
        (status = 401, description = "Missing token", body = ErrorResponse),
        (status = 403, description = "Student role required", body = ErrorResponse),
        (status = 404, description = "Assignment not found", body = ErrorResponse)
    ),
    tag = "Submissions",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, multipart))]
pub async fn submit_assignment(
    State(state): State<AppState>,
    RequireStudent(auth_user): RequireStudent,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<SubmitResponse>), AppError> {
    let form = read_submit_form(multipart).await?;

    let content = match form.content.as_deref() {
        Some(content) if !content.is_empty() => content,
        _ => return Err(AppError::bad_request("Submission content is required")),
    };

    AssignmentService::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Assignment not found"))?;

    let file_path = match &form.file {
        Some(file) => {
            Some(store_upload(&state.upload_config, "file", &file.filename, &file.data).await?)
        }
        None => None,
    };

    let submission = SubmissionService::upsert_submission(
        &state.db,
        id,
        auth_user.id(),
        content,
        file_path.as_deref(),
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            id: submission.id,
            message: "Assignment submitted successfully".to_string(),
        }),
    ))
}

/// List an assignment's submissions (owning teacher only)
#[utoipa::path(
    get,
    path = "/api/assignments/{id}/submissions",
    params(("id" = Uuid, Path, description = "Assignment ID")),
    responses(
        (status = 200, description = "Submissions, newest first", body = [SubmissionWithStudent]),
        (status = 401, description = "Missing token", body = ErrorResponse),
        (status = 403, description = "Not the owning teacher", body = ErrorResponse),
        (status = 404, description = "Assignment not found", body = ErrorResponse)
    ),
    tag = "Submissions",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn list_submissions(
    State(state): State<AppState>,
    RequireTeacher(auth_user): RequireTeacher,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<SubmissionWithStudent>>, AppError> {
    let assignment = AssignmentService::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Assignment not found"))?;

    if assignment.teacher_id != auth_user.id() {
        return Err(AppError::forbidden(
            "You can only view submissions for your assignments",
        ));
    }

    let submissions = SubmissionService::list_for_assignment(&state.db, id).await?;

    Ok(Json(submissions))
}

/// The calling student's own submission for an assignment
#[utoipa::path(
    get,
    path = "/api/assignments/{id}/my-submission",
    params(("id" = Uuid, Path, description = "Assignment ID")),
    responses(
        (status = 200, description = "Submission", body = Submission),
        (status = 401, description = "Missing token", body = ErrorResponse),
        (status = 403, description = "Student role required", body = ErrorResponse),
        (status = 404, description = "No submission found", body = ErrorResponse)
    ),
    tag = "Submissions",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_my_submission(
    State(state): State<AppState>,
    RequireStudent(auth_user): RequireStudent,
    Path(id): Path<Uuid>,
) -> Result<Json<Submission>, AppError> {
    let submission = SubmissionService::find_for_student(&state.db, id, auth_user.id())
        .await?
        .ok_or_else(|| AppError::not_found("No submission found"))?;

    Ok(Json(submission))
}
