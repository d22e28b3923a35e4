use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::submissions::model::{Submission, SubmissionWithStudent};
use crate::utils::errors::AppError;

pub struct SubmissionService;

impl SubmissionService {
    /// Insert-or-replace keyed on (assignment_id, student_id).
    ///
    /// A resubmission replaces content and file, refreshes submitted_at,
    /// and resets grade/feedback to unset. The single ON CONFLICT
    /// statement keeps concurrent resubmissions serialized at the store,
    /// with no check-then-branch window.
    #[instrument(skip(db, content))]
    pub async fn upsert_submission(
        db: &PgPool,
        assignment_id: Uuid,
        student_id: Uuid,
        content: &str,
        file_path: Option<&str>,
    ) -> Result<Submission, AppError> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"INSERT INTO submissions (assignment_id, student_id, content, file_path)
               VALUES ($1, $2, $3, $4)
               ON CONFLICT (assignment_id, student_id) DO UPDATE
               SET content = EXCLUDED.content,
                   file_path = EXCLUDED.file_path,
                   submitted_at = now(),
                   grade = NULL,
                   feedback = NULL
               RETURNING id, assignment_id, student_id, content, file_path,
                         submitted_at, grade, feedback"#,
        )
        .bind(assignment_id)
        .bind(student_id)
        .bind(content)
        .bind(file_path)
        .fetch_one(db)
        .await?;

        Ok(submission)
    }

    /// All submissions for an assignment, newest-submitted first, with
    /// student name and email joined in.
    #[instrument(skip(db))]
    pub async fn list_for_assignment(
        db: &PgPool,
        assignment_id: Uuid,
    ) -> Result<Vec<SubmissionWithStudent>, AppError> {
        let submissions = sqlx::query_as::<_, SubmissionWithStudent>(
            r#"SELECT s.id, s.assignment_id, s.student_id, s.content, s.file_path,
                      s.submitted_at, s.grade, s.feedback,
                      u.name AS student_name, u.email AS student_email
               FROM submissions s
               JOIN users u ON s.student_id = u.id
               WHERE s.assignment_id = $1
               ORDER BY s.submitted_at DESC"#,
        )
        .bind(assignment_id)
        .fetch_all(db)
        .await?;

        Ok(submissions)
    }

    #[instrument(skip(db))]
    pub async fn find_for_student(
        db: &PgPool,
        assignment_id: Uuid,
        student_id: Uuid,
    ) -> Result<Option<Submission>, AppError> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"SELECT id, assignment_id, student_id, content, file_path,
                      submitted_at, grade, feedback
               FROM submissions
               WHERE assignment_id = $1 AND student_id = $2"#,
        )
        .bind(assignment_id)
        .bind(student_id)
        .fetch_optional(db)
        .await?;

        Ok(submission)
    }
}
