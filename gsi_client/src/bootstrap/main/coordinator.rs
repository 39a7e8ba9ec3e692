use std::sync::Arc;

use futures_util::FutureExt;

use crate::bootstrap::config::{PLATFORM_SCRIPT_URL, client_config};
use crate::bootstrap::errors::AuthError;
use crate::bootstrap::types::ConfigMap;
use crate::provider::{AuthModule, Library, ProviderLibrary};
use crate::script::ScriptLoader;

use super::context::{ExecutionContext, Gate, PendingBootstrap};

/// Drives the two-stage idempotent bootstrap: script load, then auth
/// client init.
///
/// Any number of concurrent callers converge on exactly one underlying
/// load attempt and one init attempt, and all of them observe the same
/// eventual outcome. Cloning shares the loader and the context.
#[derive(Clone)]
pub struct AuthCoordinator {
    loader: Arc<dyn ScriptLoader>,
    context: ExecutionContext,
}

impl AuthCoordinator {
    pub fn new(loader: Arc<dyn ScriptLoader>) -> Self {
        Self::with_context(loader, ExecutionContext::new())
    }

    pub fn with_context(loader: Arc<dyn ScriptLoader>, context: ExecutionContext) -> Self {
        Self { loader, context }
    }

    pub fn context(&self) -> &ExecutionContext {
        &self.context
    }

    /// Sources the provider script if needed and waits for the auth
    /// module to become ready.
    ///
    /// A library that is already present resolves immediately without
    /// touching the script loader; concurrent calls share one attempt.
    pub async fn ensure_loaded(&self) -> Result<Library, AuthError> {
        let pending = match self.context.load_gate(|| self.start_load()) {
            Gate::Ready(library) => {
                tracing::debug!("provider library already loaded");
                return Ok(library);
            }
            Gate::Pending(pending) => pending,
        };
        pending.await
    }

    fn start_load(&self) -> PendingBootstrap {
        let loader = Arc::clone(&self.loader);
        let context = self.context.clone();
        async move {
            let result = async {
                tracing::info!(url = PLATFORM_SCRIPT_URL.as_str(), "injecting provider script");
                let library = loader.load(&PLATFORM_SCRIPT_URL).await?;
                context.install_library(Arc::clone(&library));
                library.load_auth_module().await;
                Ok(library)
            }
            .await;
            // The marker must be gone before any caller observes the
            // outcome, so a retry after failure starts fresh work.
            context.clear_loading();
            if let Err(error) = &result {
                tracing::warn!(%error, "provider script load failed");
            }
            result
        }
        .boxed()
        .shared()
    }

    /// Initializes the auth client with `client_id`, the default sign-in
    /// parameters and the caller's `overrides`, loading the script first
    /// when needed.
    ///
    /// Concurrent calls share one init attempt; the first caller's
    /// configuration wins and later callers' overrides take no effect on
    /// the in-flight attempt.
    pub async fn ensure_initialized(
        &self,
        client_id: &str,
        overrides: ConfigMap,
    ) -> Result<Library, AuthError> {
        if let Some(library) = self.context.initialized_library() {
            tracing::debug!("auth client already initialized");
            return Ok(library);
        }
        let config = client_config(client_id, overrides);
        let library = self.ensure_loaded().await?;
        let pending = match self.context.init_gate(|| self.start_init(library, config)) {
            Gate::Ready(library) => return Ok(library),
            Gate::Pending(pending) => pending,
        };
        pending.await
    }

    fn start_init(&self, library: Library, config: ConfigMap) -> PendingBootstrap {
        let context = self.context.clone();
        async move {
            let result = async {
                let auth = library.auth().ok_or(AuthError::ModuleUnavailable)?;
                tracing::info!("initializing auth client");
                auth.init(config).await?;
                Ok(library)
            }
            .await;
            context.clear_initializing();
            if let Err(error) = &result {
                tracing::warn!(%error, "auth client init failed");
            }
            result
        }
        .boxed()
        .shared()
    }
}
