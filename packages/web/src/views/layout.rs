use dioxus::prelude::*;

use ui::components::LoadingState;
use ui::{use_auth, NavTarget, Navbar};

use crate::Route;

/// Navbar plus the routed page. Protected pages wait for the session check and
/// send anonymous visitors to the login form.
#[component]
pub fn AppLayout() -> Element {
    let auth = use_auth();
    let route = use_route::<Route>();
    let nav = use_navigator();

    use_effect(use_reactive((&route,), move |(route,)| {
        let state = auth();
        if !state.loading && !state.is_authenticated() && route.requires_auth() {
            tracing::debug!("{} needs a session, redirecting to login", route);
            nav.replace(Route::Login {
                message: String::new(),
                redirect: route.to_string(),
            });
        }
    }));

    let on_navigate = move |target: NavTarget| {
        nav.push(Route::from_target(target));
    };

    let state = auth();
    let waiting = route.requires_auth() && !state.is_authenticated();

    rsx! {
        Navbar { active: route.nav_target(), on_navigate }
        main {
            class: "app-main container-fluid px-lg-5",
            if waiting {
                LoadingState { message: "Checking your session..." }
            } else {
                Outlet::<Route> {}
            }
        }
    }
}
