mod errors;
mod types;

pub use errors::ProviderError;
pub use types::{
    AuthInstance, AuthModule, AuthResponse, BasicProfile, Library, ProviderLibrary, ProviderUser,
    SignInListener, SignedInState,
};
