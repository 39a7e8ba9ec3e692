use async_trait::async_trait;
use url::Url;

use crate::provider::Library;
use crate::script::errors::ScriptError;

/// Attaches an external script to the surrounding document.
///
/// Implementations own the document context they attach to; an
/// environment with no usable document fails with
/// [`ScriptError::NoDocument`]. On success the script has fired its load
/// signal and the resolved value is the provider namespace it installed.
#[async_trait]
pub trait ScriptLoader: Send + Sync {
    /// Attach the script at `src` and resolve with the library handle
    /// once the load signal has fired.
    async fn load(&self, src: &Url) -> Result<Library, ScriptError>;
}
