use thiserror::Error;

/// Fixed user-facing message surfaced both by the cancel action and by the
/// error raised when a running operation observes the flag.
pub const CANCELLED_MESSAGE: &str = "operation cancelled by the user";

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("operation cancelled by the user")]
    Cancelled,
    #[error("invalid style input: {0}")]
    InvalidInput(String),
}
