use thiserror::Error;

/// Error value delivered by the provider's error continuation.
///
/// Carried through to callers unchanged: the display form is the
/// provider's own error code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{error}")]
pub struct ProviderError {
    /// Provider error code, e.g. `idpiframe_initialization_failed` or
    /// `popup_closed_by_user`.
    pub error: String,

    /// Optional human-readable detail accompanying the code.
    pub details: Option<String>,
}

impl ProviderError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}
