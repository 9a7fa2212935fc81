/// Core registry errors.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid account handle: {0}")]
    InvalidAccount(String),

    #[error("validation error: {0}")]
    ValidationError(String),
}
