use dioxus::prelude::*;

use ui::{AuthProvider, NavTarget};
use views::{Analytics, AppLayout, Dashboard, Login, Mentions, NotFound, Register, Settings};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Dashboard {},
        #[route("/mentions")]
        Mentions {},
        #[route("/analytics")]
        Analytics {},
        #[route("/settings")]
        Settings {},
        #[route("/login?:message&:redirect")]
        Login { message: String, redirect: String },
        #[route("/register")]
        Register {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    fn from_target(target: NavTarget) -> Self {
        match target {
            NavTarget::Dashboard => Route::Dashboard {},
            NavTarget::Mentions => Route::Mentions {},
            NavTarget::Analytics => Route::Analytics {},
            NavTarget::Settings => Route::Settings {},
            NavTarget::Login => Route::Login {
                message: String::new(),
                redirect: String::new(),
            },
            NavTarget::Register => Route::Register {},
        }
    }

    fn nav_target(&self) -> Option<NavTarget> {
        match self {
            Route::Dashboard {} => Some(NavTarget::Dashboard),
            Route::Mentions {} => Some(NavTarget::Mentions),
            Route::Analytics {} => Some(NavTarget::Analytics),
            Route::Settings {} => Some(NavTarget::Settings),
            Route::Login { .. } => Some(NavTarget::Login),
            Route::Register {} => Some(NavTarget::Register),
            Route::NotFound { .. } => None,
        }
    }

    /// Pages that need a signed-in user.
    fn requires_auth(&self) -> bool {
        matches!(
            self,
            Route::Dashboard {} | Route::Mentions {} | Route::Analytics {} | Route::Settings {}
        )
    }
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");
const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
const CHART_JS: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";

fn main() {
    let level = if cfg!(debug_assertions) {
        dioxus::logger::tracing::Level::DEBUG
    } else {
        dioxus::logger::tracing::Level::INFO
    };
    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("Failed to initialise logging: {e}");
    }
    tracing::info!("Using API at {}", ui::client_config().api.base_url);

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Stylesheet { href: BOOTSTRAP_CSS }
        document::Stylesheet { href: MAIN_CSS }
        document::Script { src: CHART_JS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_targets_round_trip_through_routes() {
        for target in [
            NavTarget::Dashboard,
            NavTarget::Mentions,
            NavTarget::Analytics,
            NavTarget::Settings,
            NavTarget::Login,
            NavTarget::Register,
        ] {
            assert_eq!(Route::from_target(target).nav_target(), Some(target));
        }
    }

    #[test]
    fn test_only_app_pages_require_auth() {
        assert!(Route::Dashboard {}.requires_auth());
        assert!(Route::Settings {}.requires_auth());
        assert!(!Route::Register {}.requires_auth());
        assert!(!Route::from_target(NavTarget::Login).requires_auth());
        assert!(!Route::NotFound { segments: vec!["nope".into()] }.requires_auth());
    }

    #[test]
    fn test_route_paths_match_nav_targets() {
        assert_eq!(Route::Mentions {}.to_string(), NavTarget::Mentions.path());
        assert_eq!("/analytics".parse::<Route>().ok(), Some(Route::Analytics {}));
    }
}
