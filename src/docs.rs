use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::assignments::model::{Assignment, AssignmentWithTeacher, CreateAssignmentRequest};
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{AuthResponse, LoginRequest, SignupRequest};
use crate::modules::submissions::model::{Submission, SubmissionWithStudent, SubmitResponse};
use crate::modules::users::model::{UserIdentity, UserRole};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::signup,
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::me,
        crate::modules::assignments::controller::create_assignment,
        crate::modules::assignments::controller::list_assignments,
        crate::modules::assignments::controller::get_assignment,
        crate::modules::submissions::controller::submit_assignment,
        crate::modules::submissions::controller::list_submissions,
        crate::modules::submissions::controller::get_my_submission,
    ),
    components(
        schemas(
            UserRole,
            UserIdentity,
            SignupRequest,
            LoginRequest,
            AuthResponse,
            Assignment,
            AssignmentWithTeacher,
            CreateAssignmentRequest,
            Submission,
            SubmissionWithStudent,
            SubmitResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Signup, login, and current identity"),
        (name = "Assignments", description = "Assignment creation and browsing"),
        (name = "Submissions", description = "Student submissions and teacher review")
    ),
    info(
        title = "Edtrack API",
        version = "0.1.0",
        description = "Assignment-tracking REST API built with Rust, Axum, and PostgreSQL featuring JWT-based authentication.",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
