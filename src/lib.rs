/// Post Service Library
///
/// A small HTTP service exposing CRUD operations over posts, backed by
/// PostgreSQL.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers
/// - `models`: Data structures for posts and request bodies
/// - `db`: Database access layer and repositories
/// - `error`: Error types and handling
/// - `config`: Configuration management
/// - `openapi`: OpenAPI document assembly
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod openapi;

pub use config::Config;
pub use error::{AppError, Result};
