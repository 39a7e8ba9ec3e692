use thiserror::Error;

/// Errors raised while attaching an external script to the page.
///
/// `Clone` is required so a single failed load attempt can be fanned out
/// to every caller awaiting it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// The environment has no usable document or element-creation
    /// capability, so no script element can be produced.
    #[error("unable to create dom object")]
    NoDocument,

    /// The script element was attached but the resource failed to load.
    #[error("script load failed: {0}")]
    Load(String),
}
