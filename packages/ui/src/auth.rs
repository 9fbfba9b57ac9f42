//! Authentication context and hooks for the UI.
//!
//! [`AuthProvider`] owns a `Signal<AuthState>` and shares it through context; views
//! read it with [`use_auth`] and change it through the async functions below, each
//! of which takes the signal explicitly. The bearer token lives in the platform
//! session ([`crate::make_session`]) and never in the signal.
//!
//! Any 401 goes through [`handle_api_error`], which drops the token and user and
//! sends the browser to the login page with a "session expired" banner.

use api::{ApiError, Brand, BrandsUpdate, ProfileUpdate, RegisterRequest, User};
use dioxus::prelude::*;
use store::{KeyValueStore, Session};

use crate::platform::{encode_component, redirect_to};
use crate::session::{make_client, make_session};

/// Banner shown on the login page after a 401.
pub const SESSION_EXPIRED: &str = "Session expired. Please login again.";

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    /// True until the initial `/auth/me` check has finished.
    pub loading: bool,
    /// Message from the last failed login or registration.
    pub error: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
            error: None,
        }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    fn sign_in(&mut self, user: User) {
        self.user = Some(user);
        self.error = None;
        self.loading = false;
    }

    fn sign_out(&mut self) {
        self.user = None;
        self.error = None;
        self.loading = false;
    }

    /// Fold the `/auth/brands` response into the current user.
    fn apply_brands(&mut self, update: &BrandsUpdate) {
        if let Some(user) = self.user.as_mut() {
            user.brands = update.brands.clone();
            user.active_brands_count = update
                .active_brands_count
                .or_else(|| Some(user.active_brands().count() as u32));
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let auth_state = use_signal(AuthState::default);

    // Validate the stored token once on mount
    use_hook(move || {
        spawn(async move {
            check_auth_status(auth_state).await;
        })
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Resolve the stored token into a user. Failure of any kind logs out.
pub async fn check_auth_status(mut auth: Signal<AuthState>) {
    let session = make_session();
    if !session.has_token() {
        tracing::debug!("No stored token, user not authenticated");
        auth.write().loading = false;
        return;
    }

    match make_client().me().await {
        Ok(user) => {
            tracing::info!("Authenticated as {}", user.email);
            auth.write().sign_in(user);
        }
        Err(e) => {
            tracing::warn!("Stored token rejected: {}", e);
            end_session(&session, &mut auth.write());
        }
    }
}

/// `POST /auth/login`, then store the token and set the user.
pub async fn login(mut auth: Signal<AuthState>, email: &str, password: &str) -> Result<User, String> {
    auth.write().error = None;
    let result = make_client().login(email, password).await;
    let payload = match result {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!("Login failed: {}", e);
            let message = e.user_message();
            auth.write().error = Some(message.clone());
            return Err(message);
        }
    };

    if let Err(e) = make_session().set_token(&payload.token) {
        tracing::error!("Failed to persist token: {}", e);
        let message = "Could not save your session in this browser.".to_string();
        auth.write().error = Some(message.clone());
        return Err(message);
    }
    tracing::info!("Logged in as {}", payload.user.email);
    auth.write().sign_in(payload.user.clone());
    Ok(payload.user)
}

/// `POST /auth/register`, then store the token and set the user.
pub async fn register(mut auth: Signal<AuthState>, request: &RegisterRequest) -> Result<User, String> {
    auth.write().error = None;
    let payload = match make_client().register(request).await {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!("Registration failed: {}", e);
            let message = e.user_message();
            auth.write().error = Some(message.clone());
            return Err(message);
        }
    };

    if let Err(e) = make_session().set_token(&payload.token) {
        tracing::error!("Failed to persist token: {}", e);
        let message = "Could not save your session in this browser.".to_string();
        auth.write().error = Some(message.clone());
        return Err(message);
    }
    tracing::info!("Registered {}", payload.user.email);
    auth.write().sign_in(payload.user.clone());
    Ok(payload.user)
}

/// Forget the token and the user.
pub fn logout(mut auth: Signal<AuthState>) {
    end_session(&make_session(), &mut auth.write());
    tracing::info!("Logged out");
}

fn end_session<S: KeyValueStore>(session: &Session<S>, state: &mut AuthState) {
    session.clear();
    state.sign_out();
}

/// Re-read `/auth/me`, e.g. after the unread counter changed.
pub async fn refresh(mut auth: Signal<AuthState>) -> Result<(), String> {
    match make_client().me().await {
        Ok(user) => {
            auth.write().user = Some(user);
            Ok(())
        }
        Err(e) => Err(handle_api_error(auth, &e)),
    }
}

/// `PUT /auth/brands`, merging the returned brands into the user.
pub async fn update_brands(mut auth: Signal<AuthState>, brands: &[Brand]) -> Result<(), String> {
    match make_client().update_brands(brands).await {
        Ok(update) => {
            auth.write().apply_brands(&update);
            Ok(())
        }
        Err(e) => Err(handle_api_error(auth, &e)),
    }
}

/// `PUT /auth/profile`, replacing the user with the backend's copy.
pub async fn update_profile(mut auth: Signal<AuthState>, update: &ProfileUpdate) -> Result<(), String> {
    match make_client().update_profile(update).await {
        Ok(user) => {
            auth.write().user = Some(user);
            Ok(())
        }
        Err(e) => Err(handle_api_error(auth, &e)),
    }
}

/// `PUT /auth/password`. Returns the confirmation to show.
pub async fn change_password(
    auth: Signal<AuthState>,
    current_password: &str,
    new_password: &str,
) -> Result<String, String> {
    make_client()
        .change_password(current_password, new_password)
        .await
        .map(|message| message.unwrap_or_else(|| "Password updated successfully!".to_string()))
        .map_err(|e| handle_api_error(auth, &e))
}

/// `DELETE /auth/account`, then log out.
pub async fn delete_account(auth: Signal<AuthState>) -> Result<(), String> {
    match make_client().delete_account().await {
        Ok(_) => {
            logout(auth);
            Ok(())
        }
        Err(e) => Err(handle_api_error(auth, &e)),
    }
}

pub fn clear_error(mut auth: Signal<AuthState>) {
    auth.write().error = None;
}

/// Turn an API failure into banner text. A 401 also ends the session and leaves
/// the page for the login screen.
pub fn handle_api_error(auth: Signal<AuthState>, error: &ApiError) -> String {
    if error.is_unauthorized() {
        tracing::warn!("Request unauthorized, ending session: {}", error);
        logout(auth);
        redirect_to(&session_expired_url());
        return SESSION_EXPIRED.to_string();
    }
    tracing::error!("API request failed: {}", error);
    error.user_message()
}

fn session_expired_url() -> String {
    format!("/login?message={}", encode_component(SESSION_EXPIRED))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_brands(names: &[(&str, bool)]) -> User {
        User {
            email: "ana@example.com".to_string(),
            brands: names
                .iter()
                .map(|(name, is_active)| Brand {
                    name: name.to_string(),
                    is_active: *is_active,
                })
                .collect(),
            ..User::default()
        }
    }

    #[test]
    fn test_initial_state_is_loading_and_anonymous() {
        let state = AuthState::default();
        assert!(state.loading);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_sign_in_and_out_transitions() {
        let mut state = AuthState {
            error: Some("Invalid credentials".to_string()),
            ..AuthState::default()
        };
        state.sign_in(user_with_brands(&[]));
        assert!(state.is_authenticated());
        assert!(!state.loading);
        assert!(state.error.is_none());

        state.sign_out();
        assert!(!state.is_authenticated());
        assert!(!state.loading);
    }

    #[test]
    fn test_apply_brands_merges_into_user() {
        let mut state = AuthState::default();
        state.sign_in(user_with_brands(&[("Nike", true)]));

        state.apply_brands(&BrandsUpdate {
            brands: vec![Brand::new("Nike"), Brand::new("Adidas")],
            active_brands_count: Some(2),
        });
        let user = state.user.as_ref().unwrap();
        assert_eq!(user.brand_names(), vec!["Nike", "Adidas"]);
        assert_eq!(user.active_brands_count, Some(2));
        assert_eq!(user.email, "ana@example.com");
    }

    #[test]
    fn test_apply_brands_counts_active_when_backend_omits_count() {
        let mut state = AuthState::default();
        state.sign_in(user_with_brands(&[]));
        state.apply_brands(&BrandsUpdate {
            brands: vec![
                Brand::new("Nike"),
                Brand {
                    name: "Puma".to_string(),
                    is_active: false,
                },
            ],
            active_brands_count: None,
        });
        assert_eq!(state.user.unwrap().active_brands_count, Some(1));
    }

    #[test]
    fn test_apply_brands_without_user_is_noop() {
        let mut state = AuthState::default();
        state.apply_brands(&BrandsUpdate {
            brands: vec![Brand::new("Nike")],
            active_brands_count: Some(1),
        });
        assert!(state.user.is_none());
    }

    #[test]
    fn test_ending_session_clears_token_and_user() {
        let session = Session::new(store::MemoryStore::new());
        session.set_token("jwt-123").unwrap();
        let mut state = AuthState::default();
        state.sign_in(user_with_brands(&[("Nike", true)]));

        let rejected = ApiError::Unauthorized(Some("Token expired".to_string()));
        assert!(rejected.is_unauthorized());
        end_session(&session, &mut state);

        assert!(!session.has_token());
        assert!(!state.is_authenticated());
        assert!(!state.loading);
    }

    #[test]
    fn test_session_expired_url_is_encoded() {
        assert_eq!(
            session_expired_url(),
            "/login?message=Session%20expired.%20Please%20login%20again."
        );
    }
}
