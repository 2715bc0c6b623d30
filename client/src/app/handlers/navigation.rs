//! # Navigation Handlers
//!
//! Screen navigation with an auth guard on session-only screens.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::app::state::{AppState, Screen};

/// Navigate to `screen`, pushing the current one onto history.
///
/// Screens that need a session redirect to SignIn when none is live.
pub(crate) fn handle_goto(state: Arc<RwLock<AppState>>, screen: Screen) {
    let mut state = state.write();

    if screen.requires_auth() && !state.is_authenticated() {
        tracing::warn!(screen = ?screen, "Blocked navigation without a session");
        state.nav.goto(Screen::SignIn);
        return;
    }

    state.nav.goto(screen);
}

/// Return to the previous screen, if any.
pub(crate) fn handle_back(state: Arc<RwLock<AppState>>) {
    state.write().nav.back();
}

/// Forget navigation history, staying on the current screen.
pub(crate) fn handle_clear(state: Arc<RwLock<AppState>>) {
    state.write().nav.clear();
}
