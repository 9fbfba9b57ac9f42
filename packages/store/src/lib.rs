//! Client-side persistence for the Brand Mention Tracker web client.
//!
//! The only state that outlives a page view is the bearer token and the locally saved
//! preferences ([`Session`]); everything else is fetched per view. [`ClientConfig`]
//! carries the bundled `brandtracker.toml`.

pub mod config;
pub mod error;
pub mod preferences;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageStore;

pub use config::ClientConfig;
pub use error::StoreError;
pub use preferences::Preferences;
pub use session::{KeyValueStore, Session};
