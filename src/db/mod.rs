/// Database access layer
///
/// Repository functions over the shared PostgreSQL pool. All functions
/// return `sqlx::Error`; the handler layer owns the mapping into the
/// HTTP error taxonomy.
pub mod post_repo;
