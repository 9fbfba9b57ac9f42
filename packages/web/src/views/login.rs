//! Login page view with the forgot-password dialog.

use dioxus::prelude::*;

use ui::auth::{clear_error, login};
use ui::components::{Alert, Button, Card, Feedback, Field, Input, Modal, Spinner, Tone};
use ui::forms::{is_valid_email, LoginForm};
use ui::icons::{FaChartLine, FaRightToBracket};
use ui::platform::{decode_component, sleep_ms};
use ui::{make_client, use_auth, Icon};

use crate::Route;

/// How long the forgot-password dialog stays open after a successful request.
const FORGOT_CLOSE_DELAY_MS: u64 = 3000;

/// Where to go after signing in: the `redirect` query if it names a route, else `/`.
fn redirect_target(redirect: &str) -> Route {
    let redirect = decode_component(redirect);
    if redirect.trim().is_empty() {
        return Route::Dashboard {};
    }
    match redirect.parse::<Route>() {
        Ok(Route::Login { .. }) | Ok(Route::NotFound { .. }) | Err(_) => Route::Dashboard {},
        Ok(route) => route,
    }
}

/// Login page component.
#[component]
pub fn Login(message: String, redirect: String) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut form = use_signal(LoginForm::default);
    let mut validated = use_signal(|| false);
    let mut submitting = use_signal(|| false);
    let mut show_forgot = use_signal(|| false);

    // If already logged in, continue to the requested page
    use_effect(use_reactive((&redirect,), move |(redirect,)| {
        let state = auth();
        if !state.loading && state.is_authenticated() {
            nav.replace(redirect_target(&redirect));
        }
    }));

    use_drop(move || clear_error(auth));

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        validated.set(true);
        let current = form();
        if !current.is_valid() {
            return;
        }
        spawn(async move {
            submitting.set(true);
            if let Err(message) = login(auth, &current.email, &current.password).await {
                tracing::debug!("Login rejected: {}", message);
            }
            submitting.set(false);
        });
    };

    let banner = decode_component(&message);
    let current = form();
    let email_error = if validated() { current.email_error().unwrap_or_default() } else { "" }.to_string();
    let password_error = if validated() { current.password_error().unwrap_or_default() } else { "" }.to_string();

    rsx! {
        div {
            class: "row justify-content-center",
            div {
                class: "col-md-6 col-lg-5 col-xl-4",
                Card {
                    class: "shadow border-0 mt-4",
                    body_class: "p-4 p-md-5",
                    div {
                        class: "text-center mb-4",
                        div {
                            class: "text-primary mb-3",
                            Icon { icon: FaChartLine, width: 40, height: 40 }
                        }
                        h2 { class: "text-primary fw-bold", "Welcome Back" }
                        p { class: "text-muted", "Sign in to monitor your brand mentions" }
                    }

                    if !banner.trim().is_empty() {
                        Alert { tone: Tone::Success, "{banner}" }
                    }
                    if let Some(error) = auth().error {
                        Alert {
                            tone: Tone::Danger,
                            dismissible: true,
                            on_close: move |_| clear_error(auth),
                            strong { "Login Failed" }
                            div { class: "small", "{error}" }
                        }
                    }

                    form {
                        novalidate: true,
                        onsubmit: submit,
                        Field {
                            label: "Email Address",
                            html_for: "login-email",
                            feedback: email_error.clone(),
                            Input {
                                id: "login-email",
                                r#type: "email",
                                placeholder: "Enter your email",
                                value: current.email.clone(),
                                invalid: !email_error.is_empty(),
                                oninput: move |evt: FormEvent| {
                                    form.write().email = evt.value();
                                    if auth.peek().error.is_some() {
                                        clear_error(auth);
                                    }
                                },
                            }
                        }
                        Field {
                            label: "Password",
                            html_for: "login-password",
                            feedback: password_error.clone(),
                            Input {
                                id: "login-password",
                                r#type: "password",
                                placeholder: "Enter your password",
                                value: current.password.clone(),
                                invalid: !password_error.is_empty(),
                                oninput: move |evt: FormEvent| {
                                    form.write().password = evt.value();
                                    if auth.peek().error.is_some() {
                                        clear_error(auth);
                                    }
                                },
                            }
                        }
                        div {
                            class: "d-flex justify-content-end mb-3",
                            button {
                                r#type: "button",
                                class: "btn btn-link p-0 small",
                                onclick: move |_| show_forgot.set(true),
                                "Forgot password?"
                            }
                        }
                        Button {
                            r#type: "submit",
                            class: "w-100 py-2",
                            disabled: submitting(),
                            if submitting() {
                                Spinner { small: true, class: "me-2" }
                                "Signing In..."
                            } else {
                                Icon { icon: FaRightToBracket, width: 14, height: 14 }
                                " Sign In"
                            }
                        }
                    }

                    div {
                        class: "text-center mt-4",
                        span { class: "text-muted", "Don't have an account? " }
                        Link { to: Route::Register {}, class: "fw-semibold", "Create one" }
                    }

                    Alert {
                        tone: Tone::Info,
                        class: "mt-4 mb-0 small",
                        strong { "Demo Access" }
                        div { "Use demo@brandtracker.com / demo123 to test the application" }
                    }
                }
            }
        }

        if show_forgot() {
            ForgotPasswordDialog { on_close: move |_| show_forgot.set(false) }
        }
    }
}

#[component]
fn ForgotPasswordDialog(on_close: EventHandler<()>) -> Element {
    let mut email = use_signal(String::new);
    let mut validated = use_signal(|| false);
    let mut sending = use_signal(|| false);
    let mut result = use_signal(|| Option::<Feedback>::None);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        validated.set(true);
        let address = email();
        if !is_valid_email(&address) {
            return;
        }
        spawn(async move {
            sending.set(true);
            result.set(None);
            match make_client().forgot_password(&address).await {
                Ok(_) => {
                    email.set(String::new());
                    validated.set(false);
                    result.set(Some(Feedback::success(
                        "Password reset instructions have been sent to your email.",
                    )));
                    sending.set(false);
                    sleep_ms(FORGOT_CLOSE_DELAY_MS).await;
                    on_close.call(());
                }
                Err(e) => {
                    tracing::warn!("Forgot password request failed: {}", e);
                    result.set(Some(Feedback::danger(e.user_message())));
                    sending.set(false);
                }
            }
        });
    };

    let invalid = validated() && !is_valid_email(&email());
    let email_error = if invalid { "Please enter a valid email address" } else { "" }.to_string();

    rsx! {
        Modal {
            title: "Reset Password",
            on_close,
            p { class: "text-muted", "Enter your email address and we'll send you instructions to reset your password." }
            if let Some(Feedback { tone, message, .. }) = result() {
                Alert { tone, "{message}" }
            }
            form {
                novalidate: true,
                onsubmit: submit,
                Field {
                    label: "Email Address",
                    html_for: "forgot-email",
                    feedback: email_error,
                    Input {
                        id: "forgot-email",
                        r#type: "email",
                        placeholder: "Enter your email",
                        value: email(),
                        invalid,
                        oninput: move |evt: FormEvent| {
                            email.set(evt.value());
                            result.set(None);
                        },
                    }
                }
                Button {
                    r#type: "submit",
                    class: "w-100",
                    disabled: sending(),
                    if sending() {
                        Spinner { small: true, class: "me-2" }
                        "Sending..."
                    } else {
                        "Send Reset Instructions"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_target_defaults_to_dashboard() {
        assert_eq!(redirect_target(""), Route::Dashboard {});
        assert_eq!(redirect_target("/login"), Route::Dashboard {});
    }

    #[test]
    fn test_redirect_target_follows_known_routes() {
        assert_eq!(redirect_target("/mentions"), Route::Mentions {});
        assert_eq!(redirect_target("%2Fsettings"), Route::Settings {});
    }
}
