#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity}")]
    NotFound { entity: &'static str },

    #[error("Invalid ID")]
    InvalidId,

    #[error("Validation failed: {0}")]
    Validation(String),
}
