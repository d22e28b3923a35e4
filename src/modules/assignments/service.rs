use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::assignments::model::{Assignment, AssignmentWithTeacher};
use crate::utils::errors::AppError;

pub struct AssignmentService;

impl AssignmentService {
    #[instrument(skip(db, description))]
    pub async fn create_assignment(
        db: &PgPool,
        title: &str,
        description: &str,
        due_date: chrono::DateTime<chrono::Utc>,
        teacher_id: Uuid,
    ) -> Result<Assignment, AppError> {
        let assignment = sqlx::query_as::<_, Assignment>(
            r#"INSERT INTO assignments (title, description, due_date, teacher_id)
               VALUES ($1, $2, $3, $4)
               RETURNING id, title, description, due_date, teacher_id, created_at"#,
        )
        .bind(title)
        .bind(description)
        .bind(due_date)
        .bind(teacher_id)
        .fetch_one(db)
        .await?;

        Ok(assignment)
    }

    /// Assignments authored by one teacher, newest-created first.
    #[instrument(skip(db))]
    pub async fn list_for_teacher(
        db: &PgPool,
        teacher_id: Uuid,
    ) -> Result<Vec<Assignment>, AppError> {
        let assignments = sqlx::query_as::<_, Assignment>(
            r#"SELECT id, title, description, due_date, teacher_id, created_at
               FROM assignments
               WHERE teacher_id = $1
               ORDER BY created_at DESC"#,
        )
        .bind(teacher_id)
        .fetch_all(db)
        .await?;

        Ok(assignments)
    }

    /// The global list across all teachers, newest-created first, with the
    /// owning teacher's name joined in.
    #[instrument(skip(db))]
    pub async fn list_all(db: &PgPool) -> Result<Vec<AssignmentWithTeacher>, AppError> {
        let assignments = sqlx::query_as::<_, AssignmentWithTeacher>(
            r#"SELECT a.id, a.title, a.description, a.due_date, a.teacher_id, a.created_at,
                      u.name AS teacher_name
               FROM assignments a
               JOIN users u ON a.teacher_id = u.id
               ORDER BY a.created_at DESC"#,
        )
        .fetch_all(db)
        .await?;

        Ok(assignments)
    }

    #[instrument(skip(db))]
    pub async fn find_by_id(
        db: &PgPool,
        id: Uuid,
    ) -> Result<Option<AssignmentWithTeacher>, AppError> {
        let assignment = sqlx::query_as::<_, AssignmentWithTeacher>(
            r#"SELECT a.id, a.title, a.description, a.due_date, a.teacher_id, a.created_at,
                      u.name AS teacher_name
               FROM assignments a
               JOIN users u ON a.teacher_id = u.id
               WHERE a.id = $1"#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;

        Ok(assignment)
    }
}
