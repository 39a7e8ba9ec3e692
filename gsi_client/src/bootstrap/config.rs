use std::sync::LazyLock;

use url::Url;

use crate::bootstrap::types::ConfigMap;

/// The provider's hosted client library. Fixed endpoint, not
/// configurable.
pub static PLATFORM_SCRIPT_URL: LazyLock<Url> = LazyLock::new(|| {
    Url::parse("https://apis.google.com/js/platform.js").expect("platform script url is valid")
});

/// Default sign-in parameters, applied beneath caller overrides.
pub(crate) fn sign_in_defaults() -> ConfigMap {
    ConfigMap::new()
        .with("ux_mode", "popup")
        .with("cookie_policy", "single_host_origin")
}

/// Full init configuration: the client id, then the fixed defaults, then
/// the caller's overrides. Later keys win.
pub(crate) fn client_config(client_id: &str, overrides: ConfigMap) -> ConfigMap {
    ConfigMap::new()
        .with("client_id", client_id)
        .merge(sign_in_defaults())
        .merge(overrides)
}
