//! Registration page view.

use dioxus::prelude::*;

use ui::auth::{clear_error, register};
use ui::components::{Alert, Badge, Button, ButtonVariant, Card, Field, Input, ProgressBar, Select, Spinner, Tone};
use ui::forms::RegisterForm;
use ui::icons::{FaChartLine, FaPlus, FaUserPlus, FaXmark};
use ui::presentation::{options, COMPANY_SIZES, INDUSTRIES};
use ui::{use_auth, Icon};

use crate::Route;

/// Registration page component.
#[component]
pub fn Register() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut form = use_signal(RegisterForm::default);
    let mut validated = use_signal(|| false);
    let mut submitting = use_signal(|| false);
    let mut brand_error = use_signal(|| Option::<String>::None);

    use_effect(move || {
        let state = auth();
        if !state.loading && state.is_authenticated() && !submitting() {
            nav.replace(Route::Dashboard {});
        }
    });

    use_drop(move || clear_error(auth));

    let mut add_brand = move || match form.write().add_brand() {
        Ok(()) => brand_error.set(None),
        Err(e) => brand_error.set(Some(e.message())),
    };

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        validated.set(true);
        let Some(request) = form().to_request() else {
            return;
        };
        spawn(async move {
            submitting.set(true);
            let outcome = register(auth, &request).await;
            submitting.set(false);
            if outcome.is_ok() {
                nav.push(Route::Dashboard {});
            }
        });
    };

    let current = form();
    let problem = |field: &str| -> String {
        if validated() {
            current.problem(field).unwrap_or_default().to_string()
        } else {
            String::new()
        }
    };
    let name_error = problem("name");
    let email_error = problem("email");
    let password_error = problem("password");
    let confirm_error = problem("confirm_password");
    let company_error = problem("company");
    let industry_error = problem("industry");
    let size_error = problem("company_size");

    let strength = current.strength();
    let strength_value = f64::from(strength.0);
    let strength_tone = strength.tone();
    let strength_label = strength.label();
    let mismatch = !current.confirm_password.is_empty() && !current.passwords_match();
    let confirm_feedback = if mismatch && confirm_error.is_empty() {
        "Passwords do not match".to_string()
    } else {
        confirm_error
    };
    let brand_feedback = brand_error().unwrap_or_default();

    rsx! {
        div {
            class: "row justify-content-center",
            div {
                class: "col-lg-8 col-xl-7",
                Card {
                    class: "shadow border-0 mt-4 mb-5",
                    body_class: "p-4 p-md-5",
                    div {
                        class: "text-center mb-4",
                        div {
                            class: "text-primary mb-3",
                            Icon { icon: FaChartLine, width: 40, height: 40 }
                        }
                        h2 { class: "text-primary fw-bold", "Create Your Account" }
                        p { class: "text-muted", "Start monitoring what people say about your brand" }
                    }

                    if let Some(error) = auth().error {
                        Alert {
                            tone: Tone::Danger,
                            dismissible: true,
                            on_close: move |_| clear_error(auth),
                            strong { "Registration Failed" }
                            div { class: "small", "{error}" }
                        }
                    }

                    form {
                        novalidate: true,
                        onsubmit: submit,

                        h5 { class: "mb-3", "Personal Information" }
                        div {
                            class: "row",
                            Field {
                                label: "Full Name",
                                html_for: "register-name",
                                class: "col-md-6 mb-3",
                                feedback: name_error.clone(),
                                Input {
                                    id: "register-name",
                                    placeholder: "Enter your full name",
                                    value: current.name.clone(),
                                    invalid: !name_error.is_empty(),
                                    oninput: move |evt: FormEvent| form.write().name = evt.value(),
                                }
                            }
                            Field {
                                label: "Email Address",
                                html_for: "register-email",
                                class: "col-md-6 mb-3",
                                feedback: email_error.clone(),
                                Input {
                                    id: "register-email",
                                    r#type: "email",
                                    placeholder: "Enter your email",
                                    value: current.email.clone(),
                                    invalid: !email_error.is_empty(),
                                    oninput: move |evt: FormEvent| form.write().email = evt.value(),
                                }
                            }
                        }
                        div {
                            class: "row",
                            Field {
                                label: "Password",
                                html_for: "register-password",
                                class: "col-md-6 mb-3",
                                feedback: password_error.clone(),
                                Input {
                                    id: "register-password",
                                    r#type: "password",
                                    placeholder: "Create a password",
                                    value: current.password.clone(),
                                    invalid: !password_error.is_empty(),
                                    oninput: move |evt: FormEvent| form.write().password = evt.value(),
                                }
                                if !current.password.is_empty() {
                                    div {
                                        class: "mt-2",
                                        ProgressBar { value: strength_value, tone: strength_tone }
                                        small { class: "text-muted", "Password strength: {strength_label}" }
                                    }
                                }
                            }
                            Field {
                                label: "Confirm Password",
                                html_for: "register-confirm",
                                class: "col-md-6 mb-3",
                                feedback: confirm_feedback.clone(),
                                Input {
                                    id: "register-confirm",
                                    r#type: "password",
                                    placeholder: "Confirm your password",
                                    value: current.confirm_password.clone(),
                                    invalid: !confirm_feedback.is_empty(),
                                    oninput: move |evt: FormEvent| form.write().confirm_password = evt.value(),
                                }
                            }
                        }

                        h5 { class: "mb-3 mt-2", "Company Information" }
                        Field {
                            label: "Company Name",
                            html_for: "register-company",
                            feedback: company_error.clone(),
                            Input {
                                id: "register-company",
                                placeholder: "Enter your company name",
                                value: current.company.clone(),
                                invalid: !company_error.is_empty(),
                                oninput: move |evt: FormEvent| form.write().company = evt.value(),
                            }
                        }
                        div {
                            class: "row",
                            Field {
                                label: "Industry",
                                html_for: "register-industry",
                                class: "col-md-6 mb-3",
                                feedback: industry_error,
                                Select {
                                    id: "register-industry",
                                    value: current.industry.clone(),
                                    options: options(INDUSTRIES),
                                    empty_label: "Select industry",
                                    onchange: move |evt: FormEvent| form.write().industry = evt.value(),
                                }
                            }
                            Field {
                                label: "Company Size",
                                html_for: "register-size",
                                class: "col-md-6 mb-3",
                                feedback: size_error,
                                Select {
                                    id: "register-size",
                                    value: current.company_size.clone(),
                                    options: options(COMPANY_SIZES),
                                    empty_label: "Select company size",
                                    onchange: move |evt: FormEvent| form.write().company_size = evt.value(),
                                }
                            }
                        }

                        h5 { class: "mb-3 mt-2", "Brands to Monitor" }
                        Field {
                            label: "Brand Names",
                            html_for: "register-brand",
                            feedback: brand_feedback,
                            hint: "Add the brands, products or competitors you want to track. You can change these later.",
                            div {
                                class: "input-group",
                                Input {
                                    id: "register-brand",
                                    placeholder: "Enter a brand name and press Enter",
                                    value: current.brand_input.clone(),
                                    oninput: move |evt: FormEvent| {
                                        form.write().brand_input = evt.value();
                                        brand_error.set(None);
                                    },
                                    onkeydown: move |evt: KeyboardEvent| {
                                        if evt.key() == Key::Enter {
                                            evt.prevent_default();
                                            add_brand();
                                        }
                                    },
                                }
                                Button {
                                    variant: ButtonVariant::OutlinePrimary,
                                    onclick: move |_| add_brand(),
                                    Icon { icon: FaPlus, width: 12, height: 12 }
                                    " Add"
                                }
                            }
                        }
                        if !current.brands.is_empty() {
                            div {
                                class: "d-flex flex-wrap gap-2 mb-3",
                                for brand in current.brands.clone() {
                                    Badge {
                                        key: "{brand}",
                                        tone: Tone::Primary,
                                        class: "brand-chip d-inline-flex align-items-center",
                                        "{brand}"
                                        button {
                                            r#type: "button",
                                            class: "btn btn-link btn-sm text-white p-0 ms-2",
                                            aria_label: "Remove",
                                            onclick: {
                                                let brand = brand.clone();
                                                move |_| form.write().remove_brand(&brand)
                                            },
                                            Icon { icon: FaXmark, width: 10, height: 10 }
                                        }
                                    }
                                }
                            }
                        }

                        Alert {
                            tone: Tone::Info,
                            class: "small",
                            strong { "14-Day Free Trial" }
                            div { "Your account starts with a free trial of the Starter plan. No credit card required." }
                        }

                        Button {
                            r#type: "submit",
                            class: "w-100 py-2",
                            disabled: submitting(),
                            if submitting() {
                                Spinner { small: true, class: "me-2" }
                                "Creating Account..."
                            } else {
                                Icon { icon: FaUserPlus, width: 14, height: 14 }
                                " Create Account"
                            }
                        }
                    }

                    div {
                        class: "text-center mt-4",
                        span { class: "text-muted", "Already have an account? " }
                        Link { to: Route::Login { message: String::new(), redirect: String::new() }, class: "fw-semibold", "Sign in" }
                    }
                }
            }
        }
    }
}
