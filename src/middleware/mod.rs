//! Request middleware.
//!
//! - [`auth`]: bearer-token authentication with identity re-resolution
//! - [`role`]: role-gating extractors built on [`auth::AuthUser`]
//!
//! Flow: the client sends `Authorization: Bearer <token>`; `AuthUser`
//! verifies it and re-fetches the user row; `RequireTeacher` /
//! `RequireStudent` additionally enforce the role before the handler runs.

pub mod auth;
pub mod role;
