use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures_util::future::{BoxFuture, Shared};

use crate::bootstrap::errors::AuthError;
use crate::provider::{AuthModule, Library, ProviderLibrary};

/// Future held by a pending-operation marker slot. `Shared` lets every
/// concurrent caller await the same underlying attempt and observe the
/// same outcome.
pub(crate) type PendingBootstrap = Shared<BoxFuture<'static, Result<Library, AuthError>>>;

/// Outcome of an atomic probe-or-claim on a marker slot.
pub(crate) enum Gate {
    /// The probe succeeded; no work is needed and no marker was touched.
    Ready(Library),
    /// An in-flight attempt to await, reused or newly claimed.
    Pending(PendingBootstrap),
}

/// Per-context bootstrap state: the installed library handle and the two
/// pending-operation markers.
///
/// An explicit, injectable stand-in for per-window globals. Cloning
/// yields another handle onto the same state. Marker bookkeeping happens
/// under a synchronous lock that is never held across a suspension
/// point, so check-or-create is atomic within one scheduling turn.
#[derive(Clone, Default)]
pub struct ExecutionContext {
    state: Arc<Mutex<ContextState>>,
}

#[derive(Default)]
struct ContextState {
    library: Option<Library>,
    loading: Option<PendingBootstrap>,
    initializing: Option<PendingBootstrap>,
}

impl ExecutionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// A context whose environment already carries a loaded library, as
    /// when the provider script was attached by other page code.
    pub fn with_library(library: Library) -> Self {
        let context = Self::new();
        context.install_library(library);
        context
    }

    fn lock(&self) -> MutexGuard<'_, ContextState> {
        // A poisoned lock only means a panic landed between two plain
        // assignments; the state itself is still coherent.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The installed library handle, loaded or not.
    pub(crate) fn library(&self) -> Option<Library> {
        self.lock().library.clone()
    }

    pub(crate) fn install_library(&self, library: Library) {
        self.lock().library = Some(library);
    }

    /// The library handle, if the namespace and its auth module are both
    /// present.
    pub(crate) fn loaded_library(&self) -> Option<Library> {
        loaded(&self.lock())
    }

    /// The library handle, if the auth module reports an active instance.
    pub(crate) fn initialized_library(&self) -> Option<Library> {
        initialized(&self.lock())
    }

    /// Atomic probe-or-claim for the "loading" marker. The probe, the
    /// marker check and the marker store all happen under one lock
    /// acquisition, so concurrent callers can never both start a load.
    pub(crate) fn load_gate<F>(&self, create: F) -> Gate
    where
        F: FnOnce() -> PendingBootstrap,
    {
        let mut state = self.lock();
        if let Some(library) = loaded(&state) {
            return Gate::Ready(library);
        }
        Gate::Pending(state.loading.get_or_insert_with(create).clone())
    }

    /// Atomic probe-or-claim for the "initializing" marker.
    pub(crate) fn init_gate<F>(&self, create: F) -> Gate
    where
        F: FnOnce() -> PendingBootstrap,
    {
        let mut state = self.lock();
        if let Some(library) = initialized(&state) {
            return Gate::Ready(library);
        }
        Gate::Pending(state.initializing.get_or_insert_with(create).clone())
    }

    /// Deleted unconditionally once the load attempt settles, success or
    /// failure alike.
    pub(crate) fn clear_loading(&self) {
        self.lock().loading = None;
    }

    pub(crate) fn clear_initializing(&self) {
        self.lock().initializing = None;
    }

    #[cfg(test)]
    pub(crate) fn has_loading_marker(&self) -> bool {
        self.lock().loading.is_some()
    }

    #[cfg(test)]
    pub(crate) fn has_initializing_marker(&self) -> bool {
        self.lock().initializing.is_some()
    }
}

fn loaded(state: &ContextState) -> Option<Library> {
    state
        .library
        .as_ref()
        .filter(|library| library.auth().is_some())
        .cloned()
}

fn initialized(state: &ContextState) -> Option<Library> {
    state
        .library
        .as_ref()
        .filter(|library| {
            library
                .auth()
                .and_then(|auth| auth.auth_instance())
                .is_some()
        })
        .cloned()
}
