//! gsi-client - Single-flight bootstrap for the Google Sign-In client library
//!
//! This crate coordinates the two-stage bootstrap of the provider's
//! client SDK (sourcing the hosted script, then initializing the auth
//! client) as a pair of idempotent, de-duplicated async operations. Any
//! number of concurrent callers converge on one underlying attempt per
//! stage and observe the same outcome. On top of that it exposes
//! read-through accessors over the resulting session state (current
//! user, tokens, profile) and the sign-in / sign-out operations.
//!
//! The environment seams are explicit: script injection is consumed
//! through the [`ScriptLoader`] trait and the provider's object graph
//! through the traits in this crate's provider surface, so the whole
//! bootstrap is testable against doubles.

mod bootstrap;
mod provider;
mod script;
mod session;


// Re-export the bootstrap core
pub use bootstrap::{AuthCoordinator, AuthError, ConfigMap, ExecutionContext, PLATFORM_SCRIPT_URL};

// Re-export the consumed external surfaces
pub use provider::{
    AuthInstance, AuthModule, AuthResponse, BasicProfile, Library, ProviderError, ProviderLibrary,
    ProviderUser, SignInListener, SignedInState,
};
pub use script::{ScriptError, ScriptLoader};

// Re-export the session accessors and operations
pub use session::{
    api_is_loaded, auth_instance, auth_is_loaded, current_user, is_signed_in, on_sign_in_change,
    sign_in, sign_out, user_auth_response, user_id, user_id_token, user_profile,
};
