/// Result alias that carries the custom [`CarouselError`] type.
pub type Result<T> = std::result::Result<T, CarouselError>;

/// Common error type for the core crate.
#[derive(Debug, thiserror::Error)]
pub enum CarouselError {
    /// Free-form message surfaced to the front end as is.
    #[error("{0}")]
    Message(String),
    /// A carousel needs at least one item to display.
    #[error("testimonial catalog is empty")]
    EmptyCatalog,
    /// Shared state was left poisoned by a panicking holder.
    #[error("{0} has been poisoned")]
    Poisoned(&'static str),
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// Malformed catalog, config or event script.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CarouselError {
    /// Creates a new error that simply wraps the provided message.
    pub fn msg<T: Into<String>>(msg: T) -> Self {
        Self::Message(msg.into())
    }
}

impl From<&str> for CarouselError {
    fn from(value: &str) -> Self {
        Self::msg(value)
    }
}

impl From<String> for CarouselError {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}
