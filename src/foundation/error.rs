/// Result alias used across the crate.
pub type ScanGuideResult<T> = Result<T, ScanGuideError>;

#[derive(thiserror::Error, Debug)]
/// Top-level error type.
///
/// The per-frame path (transform mapping, overlay drawing, debouncing) never returns this;
/// it only surfaces from configuration loading and trace replay.
pub enum ScanGuideError {
    /// A value failed validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// A configuration file could not be read.
    #[error("config error: {0}")]
    Config(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScanGuideError {
    /// Build a [`ScanGuideError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScanGuideError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`ScanGuideError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ScanGuideError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
