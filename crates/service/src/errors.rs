use thiserror::Error;

use models::errors::ModelError;

/// Failure kinds of the catalog services. The HTTP layer maps each variant
/// to a status code; nothing downstream inspects the message text.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{entity} not found with id: {id}")]
    NotFound { entity: &'static str, id: i64 },
    #[error("invalid reference: {0}")]
    InvalidReference(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(m) => ServiceError::Validation(m),
            ModelError::Conflict(m) => ServiceError::Conflict(m),
            ModelError::Db(m) => ServiceError::Db(m),
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self {
        ModelError::from(e).into()
    }
}
