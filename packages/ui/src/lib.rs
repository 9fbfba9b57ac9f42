//! This crate contains all shared UI for the workspace: the auth context, Navbar,
//! page views, and the Chart.js bridge.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod session;
pub use session::{client_config, make_client, make_session};

pub mod platform;

pub mod auth;
pub use auth::{use_auth, AuthProvider, AuthState};

mod navbar;
pub use navbar::{NavTarget, Navbar};

pub mod charts;
pub mod export;
pub mod format;
pub mod forms;
pub mod presentation;

pub mod views;
