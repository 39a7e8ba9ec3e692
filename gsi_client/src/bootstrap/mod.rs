mod config;
mod errors;
mod main;
mod types;

pub use config::PLATFORM_SCRIPT_URL;
pub use errors::AuthError;
pub use main::{AuthCoordinator, ExecutionContext};
pub use types::ConfigMap;

pub(crate) use config::sign_in_defaults;
