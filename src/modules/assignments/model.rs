use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// An assignment as stored. Assignments are never mutated or deleted.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Assignment {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub teacher_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Assignment joined with its owning teacher's name for display.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct AssignmentWithTeacher {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub teacher_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub teacher_name: String,
}

/// The web client sends `dueDate`, hence the camelCase wire names.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssignmentRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    pub due_date: DateTime<Utc>,
}
