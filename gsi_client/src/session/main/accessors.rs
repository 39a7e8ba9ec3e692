//! Read-through accessors over the context's session state.
//!
//! Every accessor is total: a missing link anywhere in the dependency
//! chain (no library, no auth module, no active instance, no current
//! user) yields the neutral value instead of an error.

use std::sync::Arc;

use crate::bootstrap::ExecutionContext;
use crate::provider::{
    AuthInstance, AuthModule, AuthResponse, BasicProfile, ProviderLibrary, ProviderUser,
    SignInListener, SignedInState,
};

/// Whether the provider library and its auth module are present.
pub fn api_is_loaded(context: &ExecutionContext) -> bool {
    context.loaded_library().is_some()
}

/// Whether the auth client has completed initialization.
pub fn auth_is_loaded(context: &ExecutionContext) -> bool {
    context.initialized_library().is_some()
}

/// The active auth-client instance, once initialization has completed.
pub fn auth_instance(context: &ExecutionContext) -> Option<Arc<dyn AuthInstance>> {
    context.library()?.auth()?.auth_instance()
}

/// The currently signed-in user.
pub fn current_user(context: &ExecutionContext) -> Option<Arc<dyn ProviderUser>> {
    auth_instance(context)?.current_user()
}

/// The current user's token material.
pub fn user_auth_response(context: &ExecutionContext) -> Option<AuthResponse> {
    current_user(context)?.auth_response()
}

/// The provider user id of the signed-in user.
pub fn user_id(context: &ExecutionContext) -> Option<String> {
    current_user(context)?.id()
}

/// The id token to send to a backend for verification.
pub fn user_id_token(context: &ExecutionContext) -> Option<String> {
    Some(user_auth_response(context)?.id_token)
}

/// The signed-in user's basic profile.
pub fn user_profile(context: &ExecutionContext) -> Option<BasicProfile> {
    current_user(context)?.basic_profile()
}

/// Whether a user is signed in. False when the instance or its signed-in
/// state is absent.
pub fn is_signed_in(context: &ExecutionContext) -> bool {
    auth_instance(context)
        .and_then(|instance| instance.signed_in())
        .is_some_and(|state| state.get())
}

/// Registers a listener for signed-in state changes. Returns whether the
/// registration happened.
pub fn on_sign_in_change(listener: SignInListener, context: &ExecutionContext) -> bool {
    match auth_instance(context).and_then(|instance| instance.signed_in()) {
        Some(state) => {
            state.listen(listener);
            true
        }
        None => false,
    }
}
