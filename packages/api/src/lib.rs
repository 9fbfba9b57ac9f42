//! # API crate: typed client for the brand-mention backend
//!
//! The backend is an external REST service; this crate is the only place that knows
//! its paths and JSON shapes. The web client's views call the methods on
//! [`ApiClient`] and never build URLs themselves.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: base URL join, bearer token, JSON in/out, request logging |
//! | [`envelope`] | Decoding of the `{ success, data, message }` envelope and non-2xx bodies |
//! | [`error`] | [`ApiError`] and the user-facing banner text for each failure |
//! | [`models`] | Wire models (`User`, `Mention`, `Overview`, `BrandPerformance`, ...) |
//!
//! ## Endpoints
//!
//! - **Auth** (`auth`): `login`, `register`, `me`, `update_brands`, `update_profile`,
//!   `change_password`, `forgot_password`, `delete_account`
//! - **Mentions** (`mentions`): `list_mentions`, `collect_mentions`
//! - **Dashboard** (`dashboard_api`): `overview`, `brand_performance`
//!
//! Every method returns `Result<_, ApiError>`. A 401 from any endpoint surfaces as
//! [`ApiError::Unauthorized`]; the UI's auth context turns that into a logout.

mod auth;
pub mod client;
mod dashboard_api;
pub mod envelope;
pub mod error;
mod mentions;
pub mod models;

pub use client::ApiClient;
pub use error::ApiError;
pub use mentions::Collected;
pub use models::*;

#[cfg(test)]
mod tests {
    #[test]
    fn test_model_modules_reachable_from_crate_root() {
        let overview = crate::dashboard::Overview::default();
        assert!(overview.timeline.is_empty());
        assert_eq!(
            crate::mention::Sentiment::from_name("Positive"),
            Some(crate::Sentiment::Positive)
        );
    }
}
