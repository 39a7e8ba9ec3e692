use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::bootstrap::ConfigMap;
use crate::provider::errors::ProviderError;

/// The loaded provider namespace.
pub type Library = Arc<dyn ProviderLibrary>;

/// Listener invoked with the new signed-in state whenever it changes.
pub type SignInListener = Box<dyn Fn(bool) + Send + Sync>;

/// The provider's top-level namespace object, present once its script has
/// loaded. Loaded does not mean initialized: the auth module appears only
/// after [`load_auth_module`](Self::load_auth_module) has resolved, and
/// the active instance only after the module's init has completed.
#[async_trait]
pub trait ProviderLibrary: Send + Sync + std::fmt::Debug {
    /// Request the auth sub-module and wait for its ready signal. After
    /// resolution [`auth`](Self::auth) returns the module handle.
    async fn load_auth_module(&self);

    /// The auth sub-module, if its ready signal has fired.
    fn auth(&self) -> Option<Arc<dyn AuthModule>>;
}

/// The provider's auth sub-module.
#[async_trait]
pub trait AuthModule: Send + Sync {
    /// Drive the provider's init continuation with the merged
    /// configuration. Exactly one of the success or error branches fires;
    /// the error value is surfaced unchanged.
    async fn init(&self, config: ConfigMap) -> Result<(), ProviderError>;

    /// The active auth-client instance, once initialization completed.
    fn auth_instance(&self) -> Option<Arc<dyn AuthInstance>>;
}

/// The live authentication-client object.
#[async_trait]
pub trait AuthInstance: Send + Sync {
    /// The currently signed-in user, if any.
    fn current_user(&self) -> Option<Arc<dyn ProviderUser>>;

    /// The signed-in flag with its listener registration, if the instance
    /// exposes one.
    fn signed_in(&self) -> Option<Arc<dyn SignedInState>>;

    /// Start the provider's sign-in flow with the merged parameters.
    async fn sign_in(&self, params: ConfigMap) -> Result<Arc<dyn ProviderUser>, ProviderError>;

    /// End the current session.
    async fn sign_out(&self) -> Result<(), ProviderError>;
}

/// The signed-in flag: a readable boolean with change notification.
pub trait SignedInState: Send + Sync {
    fn get(&self) -> bool;

    /// Register `listener` to be called on every state change.
    fn listen(&self, listener: SignInListener);
}

/// A provider user object. Accessors return `None` for an anonymous user
/// that carries no identity.
pub trait ProviderUser: Send + Sync + std::fmt::Debug {
    fn id(&self) -> Option<String>;

    fn auth_response(&self) -> Option<AuthResponse>;

    fn basic_profile(&self) -> Option<BasicProfile>;
}

/// Token material for the signed-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,

    /// The id token to send to a backend for verification.
    pub id_token: String,

    /// Granted scopes, space-delimited.
    pub scope: String,

    /// Seconds until the access token expires.
    pub expires_in: i64,

    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub first_issued_at: DateTime<Utc>,

    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub expires_at: DateTime<Utc>,
}

impl AuthResponse {
    /// Whether the access token's expiry instant has passed.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// Basic profile information for the signed-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicProfile {
    pub id: String,
    pub name: String,
    pub given_name: String,
    pub family_name: String,
    pub image_url: String,
    pub email: String,
}
