//! Application configuration.
//!
//! Each submodule owns one concern and loads itself from environment
//! variables via a `from_env()` constructor, so tests can build configs
//! directly with injected values instead of touching the process
//! environment.
//!
//! - [`cors`]: allowed CORS origins
//! - [`database`]: PostgreSQL connection pool initialization
//! - [`jwt`]: signing secret and token expiry
//! - [`upload`]: directory for submitted files

pub mod cors;
pub mod database;
pub mod jwt;
pub mod upload;
