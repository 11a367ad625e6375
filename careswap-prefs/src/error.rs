use thiserror::Error;

/// Errors raised by the preference layer.
#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("preference storage failed: {0}")]
    Storage(String),
    #[error("preference JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown theme `{0}` (expected light or dark)")]
    UnknownTheme(String),
    #[error("unknown font size `{0}` (expected small, medium, large or xlarge)")]
    UnknownFontSize(String),
    #[error("invalid config: {field} {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
}

impl PrefsError {
    /// Build a storage error from any displayable backend failure.
    pub fn storage(err: impl std::fmt::Display) -> Self {
        Self::Storage(err.to_string())
    }
}

pub type Result<T, E = PrefsError> = std::result::Result<T, E>;
