use thiserror::Error;

/// Errors raised when building a checked [`Square`](crate::Square).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SquareError {
    #[error("Invalid side length {side}: {reason}")]
    InvalidArgument { side: f64, reason: &'static str },
}

pub type Result<T> = std::result::Result<T, SquareError>;
