use thiserror::Error;

use crate::provider::ProviderError;
use crate::script::ScriptError;

/// Errors surfaced by the bootstrap coordinator and the session
/// operations. `Clone` lets one settled attempt deliver the same failure
/// to every concurrent caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Failure from the script-injection stage.
    #[error("script error: {0}")]
    Script(#[from] ScriptError),

    /// The provider's error continuation fired; the value passes through
    /// unchanged.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The script loaded but the library never exposed its auth module.
    #[error("auth module unavailable")]
    ModuleUnavailable,

    /// Sign-in or sign-out attempted with no active auth instance.
    #[error("auth instance not initialized")]
    NotInitialized,
}
