/// Failures of the connection lifecycle: startup, migrations and health checks.
///
/// Query errors inside repositories stay as `sea_orm::DbErr`.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("Connection failed after {attempts} attempt(s): {message}")]
    ConnectionFailed { attempts: u32, message: String },

    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    #[error("Migration failed: {0}")]
    MigrationError(String),
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;
