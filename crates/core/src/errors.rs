use thiserror::Error;

/// Failure taxonomy for one pass through the booking pipeline.
///
/// Collaborator errors carry the `eyre::Report` produced by the adapter and
/// display its whole context chain, root cause last.
#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Appointment store error: {0:#}")]
    Store(eyre::Report),

    #[error("Completion provider error: {0:#}")]
    Completion(eyre::Report),

    #[error("Messaging gateway error: {0:#}")]
    Gateway(eyre::Report),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl BookingError {
    /// Short, stable label for the failing step, used in structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            BookingError::Store(_) => "store",
            BookingError::Completion(_) => "completion",
            BookingError::Gateway(_) => "gateway",
            BookingError::Validation(_) => "validation",
            BookingError::Internal(_) => "internal",
        }
    }
}

pub type BookingResult<T> = Result<T, BookingError>;
