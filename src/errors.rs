use thiserror::Error;

/// Failures surfaced by the stocks service.
///
/// The service does no logging and no user-facing formatting; callers decide
/// how to present each case.
#[derive(Debug, Error)]
pub enum OrderError {
    /// The caller supplied no request at all.
    #[error("order request is required")]
    MissingRequest,

    /// One or more field constraints failed. The message is the aggregate of
    /// every violation found, one per line.
    #[error("{0}")]
    InvalidRequest(String),

    /// The data store rejected or failed the operation. Passed through
    /// unmodified.
    #[error(transparent)]
    Storage(#[from] mongodb::error::Error),
}

impl OrderError {
    /// The individual violation lines of an `InvalidRequest`, empty otherwise.
    pub fn violation_lines(&self) -> Vec<&str> {
        match self {
            OrderError::InvalidRequest(msg) => msg.lines().collect(),
            _ => Vec::new(),
        }
    }
}
