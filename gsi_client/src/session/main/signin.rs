use std::sync::Arc;

use crate::bootstrap::{AuthError, ConfigMap, ExecutionContext, sign_in_defaults};
use crate::provider::{AuthInstance, ProviderUser};

use super::accessors::auth_instance;

/// Signs the user in, merging the default sign-in parameters beneath the
/// caller's `params`.
///
/// Rejects with [`AuthError::NotInitialized`] when no active auth
/// instance exists on the context.
pub async fn sign_in(
    params: ConfigMap,
    context: &ExecutionContext,
) -> Result<Arc<dyn ProviderUser>, AuthError> {
    let params = sign_in_defaults().merge(params);
    match auth_instance(context) {
        Some(instance) => {
            tracing::debug!("delegating sign-in to the auth instance");
            instance.sign_in(params).await.map_err(AuthError::from)
        }
        None => Err(AuthError::NotInitialized),
    }
}

/// Signs the user out.
///
/// Rejects with [`AuthError::NotInitialized`] when no active auth
/// instance exists on the context.
pub async fn sign_out(context: &ExecutionContext) -> Result<(), AuthError> {
    match auth_instance(context) {
        Some(instance) => {
            tracing::debug!("delegating sign-out to the auth instance");
            instance.sign_out().await.map_err(AuthError::from)
        }
        None => Err(AuthError::NotInitialized),
    }
}
