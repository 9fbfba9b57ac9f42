//! Shared session and client constructors for all platforms.
//!
//! Every view builds its [`api::ApiClient`] through [`make_client`], which reads the
//! bearer token from the platform's [`store::Session`]:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorageStore`]
//! - **Native** (tests, server-side tooling): a process-wide [`store::MemoryStore`]

use std::sync::OnceLock;

use api::ApiClient;
use store::ClientConfig;

const BUNDLED_CONFIG: &str = include_str!("../../../brandtracker.toml");

/// The client configuration, parsed once from the bundled `brandtracker.toml`.
///
/// A compile-time `BRANDTRACKER_API_URL` replaces the API base URL. A malformed
/// bundled file falls back to the defaults.
pub fn client_config() -> &'static ClientConfig {
    static CONFIG: OnceLock<ClientConfig> = OnceLock::new();
    CONFIG.get_or_init(|| {
        ClientConfig::resolve(BUNDLED_CONFIG, option_env!("BRANDTRACKER_API_URL")).unwrap_or_else(|e| {
            tracing::error!("Invalid bundled {}: {}", ClientConfig::filename(), e);
            ClientConfig::default()
        })
    })
}

/// Create the platform-appropriate session.
pub fn make_session() -> store::Session<impl store::KeyValueStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::Session::new(store::LocalStorageStore)
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        thread_local! {
            static MEMORY: store::MemoryStore = store::MemoryStore::new();
        }
        store::Session::new(MEMORY.with(|m| m.clone()))
    }
}

/// An API client pointed at the configured backend, carrying the stored token.
pub fn make_client() -> ApiClient {
    ApiClient::new(client_config().api.base_url.clone()).with_token(make_session().token())
}
