use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A student's submission for one assignment.
///
/// At most one row exists per (assignment_id, student_id); resubmission
/// replaces the row's content in place. `grade` and `feedback` are kept in
/// the schema for a grading flow that has no API surface yet.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Submission {
    pub id: Uuid,
    pub assignment_id: Uuid,
    pub student_id: Uuid,
    pub content: String,
    pub file_path: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub grade: Option<i32>,
    pub feedback: Option<String>,
}

/// Submission joined with the submitting student for the teacher view.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct SubmissionWithStudent {
    pub id: Uuid,
    pub assignment_id: Uuid,
    pub student_id: Uuid,
    pub content: String,
    pub file_path: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub grade: Option<i32>,
    pub feedback: Option<String>,
    pub student_name: String,
    pub student_email: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SubmitResponse {
    pub id: Uuid,
    pub message: String,
}

/// Fields parsed out of the `multipart/form-data` submit request.
#[derive(Debug, Default)]
pub struct SubmitForm {
    pub content: Option<String>,
    pub file: Option<UploadedFile>,
}

#[derive(Debug)]
pub struct UploadedFile {
    pub filename: String,
    pub data: Vec<u8>,
}
