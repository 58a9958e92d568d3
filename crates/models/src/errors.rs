use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("constraint violation: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
}

pub const DUPLICATE_VALUE: &str = "a record with the same unique value already exists";
pub const BROKEN_REFERENCE: &str = "the referenced record is missing or still in use";

impl From<DbErr> for ModelError {
    fn from(e: DbErr) -> Self {
        let sql = e.sql_err();
        classify(sql, e.to_string())
    }
}

// Driver text stays in the logs; callers only see the fixed messages.
fn classify(sql: Option<SqlErr>, raw: String) -> ModelError {
    match sql {
        Some(SqlErr::UniqueConstraintViolation(msg)) => {
            debug!(constraint = %msg, "unique constraint violated");
            ModelError::Conflict(DUPLICATE_VALUE.into())
        }
        Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
            debug!(constraint = %msg, "foreign key constraint violated");
            ModelError::Conflict(BROKEN_REFERENCE.into())
        }
        _ => ModelError::Db(raw),
    }
}
