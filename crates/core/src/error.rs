/// Result alias that carries the custom [`TintError`] type.
pub type Result<T> = std::result::Result<T, TintError>;

/// Common error type for the core crate.
///
/// Out-of-range sensor readings are never errors (the mapping functions clamp
/// them) and a missing sensor is never an error (the driver surfaces a notice
/// and stops delivering that kind). What remains fallible is IO, JSON
/// decoding, malformed sample lines and mutex poisoning.
#[derive(Debug, thiserror::Error)]
pub enum TintError {
    /// Free-form message, used for malformed input lines and poisoned state.
    #[error("{0}")]
    Message(String),
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// Wrapper around JSON decode errors from trace and config files.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

impl TintError {
    /// Creates a new error that simply wraps the provided message.
    pub fn msg<T: Into<String>>(msg: T) -> Self {
        Self::Message(msg.into())
    }
}

impl From<&str> for TintError {
    fn from(value: &str) -> Self {
        Self::msg(value)
    }
}

impl From<String> for TintError {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}
