/// Result alias that carries the custom [`CollageError`] type.
pub type Result<T> = std::result::Result<T, CollageError>;

/// Common error type for the core crate.
#[derive(Debug, thiserror::Error)]
pub enum CollageError {
    /// A negative photo index reached the gallery. The controller never
    /// produces one, so this always points at a caller bug.
    #[error("photo index must be non-negative, got {0}")]
    InvalidPhotoIndex(i64),
    /// The card list does not place six cards on six distinct slots.
    #[error("invalid card layout: {0}")]
    InvalidLayout(String),
    /// A tunable was rejected during validation.
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("{0}")]
    Message(String),
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

impl CollageError {
    /// Creates a new error that simply wraps the provided message.
    pub fn msg<T: Into<String>>(msg: T) -> Self {
        Self::Message(msg.into())
    }
}

impl From<&str> for CollageError {
    fn from(value: &str) -> Self {
        Self::msg(value)
    }
}

impl From<String> for CollageError {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}
