use dioxus::prelude::*;

use api::{Plan, ProfileUpdate, User};
use store::preferences::{LANGUAGES, TIMEZONES};
use store::Preferences;

use crate::auth::{change_password, delete_account, update_brands, update_profile, use_auth};
use crate::components::{
    Alert, Badge, Button, ButtonVariant, Card, Feedback, Field, Input, LoadingState, Modal, ProgressBar,
    Select, Spinner, Switch, Tone,
};
use crate::forms::{BrandEditor, PasswordChange};
use crate::icons::{FaBell, FaCreditCard, FaLock, FaPlus, FaTags, FaTrash, FaUser};
use crate::navbar::NavTarget;
use crate::platform::detect_timezone;
use crate::presentation::{options, plan_tone, COMPANY_SIZES, INDUSTRIES};
use crate::session::make_session;
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsTab {
    Brands,
    Profile,
    Security,
    Preferences,
    Subscription,
}

impl SettingsTab {
    const ALL: [SettingsTab; 5] = [
        SettingsTab::Brands,
        SettingsTab::Profile,
        SettingsTab::Security,
        SettingsTab::Preferences,
        SettingsTab::Subscription,
    ];

    fn label(&self) -> &'static str {
        match self {
            SettingsTab::Brands => "Brands",
            SettingsTab::Profile => "Profile",
            SettingsTab::Security => "Security",
            SettingsTab::Preferences => "Preferences",
            SettingsTab::Subscription => "Subscription",
        }
    }
}

/// Shared settings view.
///
/// Feedback from every tab goes to the single alert at the top of the page.
#[component]
pub fn SettingsView(on_navigate: EventHandler<NavTarget>) -> Element {
    let auth = use_auth();
    let mut tab = use_signal(|| SettingsTab::Brands);
    let mut feedback = use_signal(|| Option::<Feedback>::None);

    let Some(user) = auth().user else {
        return rsx! {
            LoadingState { message: "Loading settings..." }
        };
    };
    let plan = user.plan();
    let max_brands = user
        .max_brands()
        .map(|n| n.to_string())
        .unwrap_or_else(|| "Unlimited".to_string());
    let status = user.status.clone().unwrap_or_else(|| "unknown".to_string());
    let status_tone = if user.is_active() { Tone::Success } else { Tone::Secondary };
    let active_brands = user
        .active_brands_count
        .unwrap_or_else(|| user.active_brands().count() as u32);

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "settings",
            h1 { class: "h3 mb-1", "Settings" }
            p { class: "text-muted mb-4", "Manage your brands, account and notifications" }

            if let Some(notice) = feedback() {
                Alert {
                    tone: notice.tone,
                    dismissible: true,
                    on_close: move |_| feedback.set(None),
                    "{notice.message}"
                }
            }

            div {
                class: "row g-4",
                div {
                    class: "col-lg-3",
                    Card {
                        class: "mb-3",
                        h6 { class: "text-muted mb-3", "Account Summary" }
                        div {
                            class: "d-flex justify-content-between mb-2",
                            span { "Plan" }
                            Badge { tone: plan_tone(plan), "{plan.as_str().to_uppercase()}" }
                        }
                        div {
                            class: "d-flex justify-content-between mb-2",
                            span { "Active brands" }
                            span { class: "fw-semibold", "{active_brands} / {max_brands}" }
                        }
                        div {
                            class: "d-flex justify-content-between",
                            span { "Status" }
                            Badge {
                                tone: status_tone,
                                "{status}"
                            }
                        }
                        if user.is_trial_active {
                            hr {}
                            small { class: "text-muted", "Trial: {user.trial_days_left} days left" }
                            ProgressBar { class: "mt-1", value: user.trial_progress(), tone: Tone::Warning }
                        }
                    }
                    div {
                        class: "list-group",
                        for item in SettingsTab::ALL {
                            button {
                                key: "{item.label()}",
                                r#type: "button",
                                class: if tab() == item { "list-group-item list-group-item-action active" } else { "list-group-item list-group-item-action" },
                                onclick: move |_| {
                                    tab.set(item);
                                    feedback.set(None);
                                },
                                span {
                                    class: "me-2",
                                    match item {
                                        SettingsTab::Brands => rsx! { Icon { icon: FaTags, width: 14, height: 14 } },
                                        SettingsTab::Profile => rsx! { Icon { icon: FaUser, width: 14, height: 14 } },
                                        SettingsTab::Security => rsx! { Icon { icon: FaLock, width: 14, height: 14 } },
                                        SettingsTab::Preferences => rsx! { Icon { icon: FaBell, width: 14, height: 14 } },
                                        SettingsTab::Subscription => rsx! { Icon { icon: FaCreditCard, width: 14, height: 14 } },
                                    }
                                }
                                "{item.label()}"
                            }
                        }
                    }
                }
                div {
                    class: "col-lg-9",
                    match tab() {
                        SettingsTab::Brands => rsx! { BrandsTab { user: user.clone(), feedback } },
                        SettingsTab::Profile => rsx! { ProfileTab { user: user.clone(), feedback } },
                        SettingsTab::Security => rsx! { SecurityTab { feedback, on_navigate } },
                        SettingsTab::Preferences => rsx! { PreferencesTab { user: user.clone(), feedback } },
                        SettingsTab::Subscription => rsx! { SubscriptionTab { user: user.clone() } },
                    }
                }
            }
        }
    }
}

#[component]
fn BrandsTab(user: User, feedback: Signal<Option<Feedback>>) -> Element {
    let auth = use_auth();
    let mut feedback = feedback;
    let mut editor = use_signal(|| BrandEditor::new(user.brands.clone(), user.max_brands()));
    let mut new_brand = use_signal(String::new);
    let mut saving = use_signal(|| false);

    // Start over from the stored brands whenever the user record changes
    use_effect(use_reactive((&user,), move |(user,)| {
        editor.set(BrandEditor::new(user.brands.clone(), user.max_brands()));
    }));

    let mut add_brand = move || {
        let name = new_brand();
        let added = editor.write().add(&name);
        match added {
            Ok(()) => {
                new_brand.set(String::new());
                feedback.set(None);
            }
            Err(e) => feedback.set(Some(Feedback::warning(e.message()))),
        }
    };

    let save = move |_: MouseEvent| {
        let brands = match editor.read().to_save() {
            Ok(brands) => brands,
            Err(e) => {
                feedback.set(Some(Feedback::warning(e.message())));
                return;
            }
        };
        spawn(async move {
            saving.set(true);
            match update_brands(auth, &brands).await {
                Ok(()) => feedback.set(Some(Feedback::success("Brands updated successfully!"))),
                Err(message) => feedback.set(Some(Feedback::danger(message))),
            }
            saving.set(false);
        });
    };

    let state = editor();
    let limit = state
        .max_brands
        .map(|n| n.to_string())
        .unwrap_or_else(|| "Unlimited".to_string());

    rsx! {
        Card {
            title: "Brand Monitoring",
            p {
                class: "text-muted",
                "Tracking {state.brands.len()} of {limit} brands. Only active brands are monitored."
            }
            div {
                class: "input-group mb-3",
                Input {
                    id: "new-brand",
                    placeholder: "Add a brand, product or keyword",
                    value: new_brand(),
                    disabled: state.at_limit(),
                    oninput: move |evt: FormEvent| new_brand.set(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            evt.prevent_default();
                            add_brand();
                        }
                    },
                }
                Button {
                    variant: ButtonVariant::OutlinePrimary,
                    disabled: state.at_limit(),
                    onclick: move |_| add_brand(),
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    " Add"
                }
            }
            if state.at_limit() {
                Alert {
                    tone: Tone::Warning,
                    "You have reached the brand limit of your plan. Upgrade to track more brands."
                }
            }

            if state.brands.is_empty() {
                p { class: "text-muted text-center py-3", "No brands yet. Add one above to start monitoring." }
            } else {
                ul {
                    class: "list-group mb-3",
                    for (index, brand) in state.brands.iter().enumerate() {
                        li {
                            key: "{brand.name}",
                            class: "list-group-item d-flex justify-content-between align-items-center",
                            div {
                                class: "form-check form-switch mb-0",
                                input {
                                    id: "brand-{index}",
                                    class: "form-check-input",
                                    r#type: "checkbox",
                                    checked: brand.is_active,
                                    onchange: move |_| editor.write().toggle(index),
                                }
                                label {
                                    class: if brand.is_active { "form-check-label fw-semibold" } else { "form-check-label text-muted text-decoration-line-through" },
                                    r#for: "brand-{index}",
                                    "{brand.name}"
                                }
                            }
                            Button {
                                variant: ButtonVariant::OutlineDanger,
                                small: true,
                                onclick: move |_| editor.write().remove(index),
                                Icon { icon: FaTrash, width: 12, height: 12 }
                            }
                        }
                    }
                }
            }

            div {
                class: "d-flex justify-content-between align-items-center",
                small { class: "text-muted", "{state.active_count()} active" }
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: saving(),
                    onclick: save,
                    if saving() {
                        Spinner { small: true, class: "me-1" }
                        "Saving..."
                    } else {
                        "Save Brands"
                    }
                }
            }
        }
    }
}

#[component]
fn ProfileTab(user: User, feedback: Signal<Option<Feedback>>) -> Element {
    let auth = use_auth();
    let mut feedback = feedback;
    let mut form = use_signal(|| ProfileUpdate::from_user(&user));
    let mut saving = use_signal(|| false);

    use_effect(use_reactive((&user,), move |(user,)| {
        form.set(ProfileUpdate::from_user(&user));
    }));

    let save = move |evt: FormEvent| {
        evt.prevent_default();
        let update = form();
        if update.name.trim().is_empty() {
            feedback.set(Some(Feedback::warning("Name is required")));
            return;
        }
        spawn(async move {
            saving.set(true);
            match update_profile(auth, &update).await {
                Ok(()) => feedback.set(Some(Feedback::success("Profile updated successfully!"))),
                Err(message) => feedback.set(Some(Feedback::danger(message))),
            }
            saving.set(false);
        });
    };

    let current = form();

    rsx! {
        Card {
            title: "Profile Information",
            form {
                onsubmit: save,
                div {
                    class: "row",
                    div {
                        class: "col-md-6",
                        Field {
                            label: "Full Name",
                            html_for: "profile-name",
                            Input {
                                id: "profile-name",
                                value: current.name.clone(),
                                oninput: move |evt: FormEvent| form.write().name = evt.value(),
                            }
                        }
                    }
                    div {
                        class: "col-md-6",
                        Field {
                            label: "Email",
                            html_for: "profile-email",
                            hint: "Email cannot be changed",
                            Input {
                                id: "profile-email",
                                r#type: "email",
                                value: user.email.clone(),
                                disabled: true,
                                oninput: move |_| {},
                            }
                        }
                    }
                    div {
                        class: "col-md-6",
                        Field {
                            label: "Company",
                            html_for: "profile-company",
                            Input {
                                id: "profile-company",
                                value: current.company.clone(),
                                oninput: move |evt: FormEvent| form.write().company = evt.value(),
                            }
                        }
                    }
                    div {
                        class: "col-md-6",
                        Field {
                            label: "Industry",
                            html_for: "profile-industry",
                            Select {
                                id: "profile-industry",
                                value: current.profile.industry.clone(),
                                options: options(INDUSTRIES),
                                empty_label: "Select industry",
                                onchange: move |evt: FormEvent| form.write().profile.industry = evt.value(),
                            }
                        }
                    }
                    div {
                        class: "col-md-6",
                        Field {
                            label: "Company Size",
                            html_for: "profile-size",
                            Select {
                                id: "profile-size",
                                value: current.profile.company_size.clone(),
                                options: options(COMPANY_SIZES),
                                empty_label: "Select company size",
                                onchange: move |evt: FormEvent| form.write().profile.company_size = evt.value(),
                            }
                        }
                    }
                    div {
                        class: "col-md-6",
                        Field {
                            label: "Website",
                            html_for: "profile-website",
                            Input {
                                id: "profile-website",
                                r#type: "url",
                                placeholder: "https://example.com",
                                value: current.profile.website.clone(),
                                oninput: move |evt: FormEvent| form.write().profile.website = evt.value(),
                            }
                        }
                    }
                    div {
                        class: "col-md-6",
                        Field {
                            label: "Phone",
                            html_for: "profile-phone",
                            Input {
                                id: "profile-phone",
                                r#type: "tel",
                                value: current.profile.phone.clone(),
                                oninput: move |evt: FormEvent| form.write().profile.phone = evt.value(),
                            }
                        }
                    }
                    div {
                        class: "col-md-6",
                        Field {
                            label: "Location",
                            html_for: "profile-location",
                            Input {
                                id: "profile-location",
                                placeholder: "City, Country",
                                value: current.profile.location.clone(),
                                oninput: move |evt: FormEvent| form.write().profile.location = evt.value(),
                            }
                        }
                    }
                }
                Button {
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Saving..." } else { "Save Profile" }
                }
            }
        }
    }
}

#[component]
fn SecurityTab(feedback: Signal<Option<Feedback>>, on_navigate: EventHandler<NavTarget>) -> Element {
    let auth = use_auth();
    let mut feedback = feedback;
    let mut form = use_signal(PasswordChange::default);
    let mut saving = use_signal(|| false);
    let mut confirm_delete = use_signal(|| false);
    let mut deleting = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let change = form();
        if let Err(message) = change.validate() {
            feedback.set(Some(Feedback::warning(message)));
            return;
        }
        spawn(async move {
            saving.set(true);
            match change_password(auth, &change.current, &change.new).await {
                Ok(message) => {
                    form.set(PasswordChange::default());
                    feedback.set(Some(Feedback::success(message)));
                }
                Err(message) => feedback.set(Some(Feedback::danger(message))),
            }
            saving.set(false);
        });
    };

    let remove_account = move |_: MouseEvent| {
        spawn(async move {
            deleting.set(true);
            match delete_account(auth).await {
                Ok(()) => {
                    confirm_delete.set(false);
                    on_navigate.call(NavTarget::Login);
                }
                Err(message) => {
                    confirm_delete.set(false);
                    feedback.set(Some(Feedback::danger(message)));
                }
            }
            deleting.set(false);
        });
    };

    let current = form();
    let mismatch = !current.confirm.is_empty() && current.new != current.confirm;
    let mismatch_message = if mismatch { "Passwords do not match" } else { "" };

    rsx! {
        Card {
            title: "Change Password",
            class: "mb-4",
            form {
                onsubmit: submit,
                Field {
                    label: "Current Password",
                    html_for: "current-password",
                    Input {
                        id: "current-password",
                        r#type: "password",
                        value: current.current.clone(),
                        oninput: move |evt: FormEvent| form.write().current = evt.value(),
                    }
                }
                Field {
                    label: "New Password",
                    html_for: "new-password",
                    hint: "At least 6 characters",
                    Input {
                        id: "new-password",
                        r#type: "password",
                        value: current.new.clone(),
                        oninput: move |evt: FormEvent| form.write().new = evt.value(),
                    }
                }
                Field {
                    label: "Confirm New Password",
                    html_for: "confirm-password",
                    feedback: mismatch_message,
                    Input {
                        id: "confirm-password",
                        r#type: "password",
                        value: current.confirm.clone(),
                        invalid: mismatch,
                        oninput: move |evt: FormEvent| form.write().confirm = evt.value(),
                    }
                }
                Button {
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Updating..." } else { "Update Password" }
                }
            }
        }

        Card {
            title: "Danger Zone",
            class: "border-danger",
            p { class: "text-muted", "Deleting your account removes your brands and collected mentions. This cannot be undone." }
            Button {
                variant: ButtonVariant::OutlineDanger,
                onclick: move |_| confirm_delete.set(true),
                Icon { icon: FaTrash, width: 12, height: 12 }
                " Delete Account"
            }
        }

        if confirm_delete() {
            Modal {
                title: "Delete Account",
                on_close: move |_| confirm_delete.set(false),
                footer: rsx! {
                    Button {
                        variant: ButtonVariant::Secondary,
                        disabled: deleting(),
                        onclick: move |_| confirm_delete.set(false),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Danger,
                        disabled: deleting(),
                        onclick: remove_account,
                        if deleting() { "Deleting..." } else { "Delete My Account" }
                    }
                },
                p { "Are you sure you want to delete your account?" }
                p { class: "text-muted mb-0", "All of your data will be permanently removed." }
            }
        }
    }
}

/// Saved preferences, then the backend's copy, then defaults in the browser's zone.
fn initial_preferences(user: &User) -> Preferences {
    make_session()
        .stored_preferences()
        .or_else(|| user.preferences.clone())
        .unwrap_or_else(|| match detect_timezone() {
            Some(timezone) => Preferences::default().with_timezone(timezone),
            None => Preferences::default(),
        })
}

#[component]
fn PreferencesTab(user: User, feedback: Signal<Option<Feedback>>) -> Element {
    let mut feedback = feedback;
    let mut prefs = use_signal(|| initial_preferences(&user));

    let save = move |evt: FormEvent| {
        evt.prevent_default();
        match make_session().save_preferences(&prefs()) {
            Ok(()) => {
                tracing::info!("Preferences saved");
                feedback.set(Some(Feedback::success("Preferences updated successfully!")));
            }
            Err(e) => {
                tracing::error!("Failed to save preferences: {}", e);
                feedback.set(Some(Feedback::danger("Could not save preferences in this browser.")));
            }
        }
    };

    let current = prefs();
    let mut timezones = options(&TIMEZONES.iter().map(|tz| (*tz, *tz)).collect::<Vec<_>>());
    if !TIMEZONES.contains(&current.timezone.as_str()) {
        timezones.insert(0, (current.timezone.clone(), current.timezone.clone()));
    }

    rsx! {
        Card {
            title: "Notification Preferences",
            form {
                onsubmit: save,
                Switch {
                    id: "pref-email",
                    label: "Email Notifications",
                    description: "Receive an email when new mentions are collected",
                    checked: current.email_notifications,
                    onchange: move |on| prefs.write().email_notifications = on,
                }
                Switch {
                    id: "pref-weekly",
                    label: "Weekly Reports",
                    description: "A summary of mention volume and sentiment every week",
                    checked: current.weekly_reports,
                    onchange: move |on| prefs.write().weekly_reports = on,
                }
                Switch {
                    id: "pref-sentiment",
                    label: "Sentiment Alerts",
                    description: "Alert me when negative sentiment rises",
                    checked: current.sentiment_alerts,
                    onchange: move |on| prefs.write().sentiment_alerts = on,
                }
                Switch {
                    id: "pref-spikes",
                    label: "Spike Alerts",
                    description: "Alert me on unusual mention volume",
                    checked: current.spike_alerts,
                    onchange: move |on| prefs.write().spike_alerts = on,
                }
                hr {}
                div {
                    class: "row",
                    div {
                        class: "col-md-6",
                        Field {
                            label: "Language",
                            html_for: "pref-language",
                            Select {
                                id: "pref-language",
                                value: current.language.clone(),
                                options: options(LANGUAGES),
                                onchange: move |evt: FormEvent| prefs.write().language = evt.value(),
                            }
                        }
                    }
                    div {
                        class: "col-md-6",
                        Field {
                            label: "Timezone",
                            html_for: "pref-timezone",
                            Select {
                                id: "pref-timezone",
                                value: current.timezone.clone(),
                                options: timezones,
                                onchange: move |evt: FormEvent| prefs.write().timezone = evt.value(),
                            }
                        }
                    }
                }
                Button { r#type: "submit", "Save Preferences" }
            }
        }
    }
}

#[component]
fn SubscriptionTab(user: User) -> Element {
    let plan = user.plan();
    let limits = plan.limits();
    let upgrades: Vec<Plan> = [Plan::Starter, Plan::Professional, Plan::Enterprise]
        .into_iter()
        .filter(|p| *p != plan)
        .collect();

    rsx! {
        Card {
            title: "Current Plan",
            class: "mb-4",
            div {
                class: "d-flex align-items-center gap-2 mb-3",
                Badge { tone: plan_tone(plan), class: "fs-6", "{plan.as_str().to_uppercase()}" }
                if user.is_trial_active {
                    Badge { tone: Tone::Warning, "Trial: {user.trial_days_left} days left" }
                }
            }
            div {
                class: "row mb-3",
                div {
                    class: "col-6",
                    small { class: "text-muted d-block", "Brands" }
                    span { class: "fw-semibold", "{limits.brands_label()}" }
                }
                div {
                    class: "col-6",
                    small { class: "text-muted d-block", "Mentions / month" }
                    span { class: "fw-semibold", "{limits.mentions_label()}" }
                }
            }
            ul {
                class: "mb-0",
                for feature in limits.features.iter() {
                    li { key: "{feature}", "{feature}" }
                }
            }
        }

        div {
            class: "row g-3",
            for other in upgrades {
                div {
                    key: "{other.as_str()}",
                    class: "col-md-4",
                    Card {
                        class: "h-100",
                        h5 { class: "text-capitalize", "{other.as_str()}" }
                        p {
                            class: "text-muted small mb-2",
                            "{other.limits().brands_label()} brands, {other.limits().mentions_label()} mentions"
                        }
                        ul {
                            class: "small",
                            for feature in other.limits().features.iter() {
                                li { key: "{feature}", "{feature}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
