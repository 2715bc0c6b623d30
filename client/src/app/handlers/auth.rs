//! # Authentication Handlers
//!
//! Handlers for login, signup, and logout.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use shared::PushTokenKind;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, Inbox, NavStack, Screen};
use crate::services::session::SessionStore;
use crate::utils::validation;

/// Handle login submission.
///
/// Internal handler function - use [`crate::app::App::handle_login`] instead.
pub(crate) fn handle_login(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    email: String,
    password: String,
) {
    let email_check = validation::validate_email(&email);
    if !email_check.is_valid {
        state.write().auth_error = email_check.error;
        return;
    }
    if password.is_empty() {
        state.write().auth_error = Some("Password is required".to_string());
        return;
    }

    let api = match state.read().api.clone() {
        Some(api) => api,
        None => {
            state.write().auth_error = Some("API client not available".to_string());
            return;
        }
    };

    tokio::spawn(async move {
        let result = api.login(email, password).await;
        let _ = event_tx.send(AppEvent::LoginResult(result)).await;
    });
}

/// Handle signup submission.
///
/// Internal handler function - use [`crate::app::App::handle_signup`] instead.
pub(crate) fn handle_signup(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    email: String,
    name: String,
    password: String,
) {
    let email_check = validation::validate_email(&email);
    if !email_check.is_valid {
        state.write().auth_error = email_check.error;
        return;
    }
    if name.trim().is_empty() {
        state.write().auth_error = Some("Name is required".to_string());
        return;
    }
    if password.is_empty() {
        state.write().auth_error = Some("Password is required".to_string());
        return;
    }

    let api = match state.read().api.clone() {
        Some(api) => api,
        None => {
            state.write().auth_error = Some("API client not available".to_string());
            return;
        }
    };

    tokio::spawn(async move {
        let result = api.signup(email, name, password).await;
        let _ = event_tx.send(AppEvent::SignupResult(result)).await;
    });
}

/// Handle logout.
///
/// Clears the stored session, asks the server to forget the device push
/// token, empties all per-session state, and lands back on Splash with no
/// history.
pub(crate) fn handle_logout(
    state: Arc<RwLock<AppState>>,
    session_store: &SessionStore,
    event_tx: Sender<AppEvent>,
) {
    session_store.save(None);

    let mut state = state.write();

    // Best-effort; the session dies locally either way.
    if let (Some(api), Some(token), Some(device_token)) = (
        state.api.clone(),
        state.session.clone(),
        state.device_token.clone(),
    ) {
        tokio::spawn(async move {
            let result = api
                .push_token(token, device_token, PushTokenKind::Remove)
                .await;
            let _ = event_tx.send(AppEvent::PushTokenResult(result)).await;
        });
    }

    state.session = None;
    state.user = None;
    state.friends = Vec::new();
    state.all_groups = Vec::new();
    state.joined_groups = Vec::new();
    state.not_joined_groups = Vec::new();
    state.inbox = Inbox::default();
    state.recommendations = Vec::new();
    state.draft_target = None;
    state.viewing_group = None;
    state.auth_error = None;
    state.draft_error = None;
    state.nav = NavStack::new();
    debug_assert_eq!(state.nav.current(), Screen::Splash);

    tracing::info!("Logged out");
}
