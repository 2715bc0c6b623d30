//! # Application Orchestrator
//!
//! The main [`App`] struct ties the client together: shared state behind
//! `Arc<RwLock<AppState>>`, user action handlers, background fetch tasks,
//! and the event channel that carries task results back to the driving
//! thread.
//!
//! ## Architecture
//!
//! The client follows an event-driven pattern:
//!
//! ```text
//! user action ──► handler (validate, then tokio::spawn)
//!                     │
//!                     ▼
//!            API call on a Tokio task
//!                     │ async_channel (unbounded)
//!                     ▼
//!          AppEvent ──► event handler ──► AppState slice update
//! ```
//!
//! The driving loop calls [`App::on_tick`] to drain pending events, or
//! awaits [`App::next_event`] when it has nothing else to do. Each event
//! updates only its own slice of state, so the independent fetches of a
//! refresh cycle may complete in any order.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use client::app::App;
//!
//! # async fn run() {
//! let mut app = App::new();
//! if !app.restore_session() {
//!     app.handle_login("a@x.edu".to_string(), "hunter2".to_string());
//! }
//! while let Some(event) = app.next_event().await {
//!     app.handle_event(event);
//! }
//! # }
//! ```

mod event_handler;
mod events;
mod handlers;
mod state;
mod tasks;

pub use events::AppEvent;
pub use state::{AppState, DraftTarget, Inbox, NavStack, Screen};

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use shared::{Group, User, Uuid};

use crate::core::service::ApiService;
use crate::services::api::ApiClient;
use crate::services::session::SessionStore;

/// Main application orchestrator.
pub struct App {
    /// Thread-safe shared application state.
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for async task results.
    pub event_rx: Receiver<AppEvent>,

    /// Channel sender for async task results (cloned into spawned tasks).
    event_tx: Sender<AppEvent>,

    /// Login token persistence.
    session_store: SessionStore,
}

impl App {
    /// Create an app wired to the real backend and the default session file.
    pub fn new() -> Self {
        Self::with_parts(Arc::new(ApiClient::new()), SessionStore::new())
    }

    /// Create an app from explicit parts. Tests inject mock services and a
    /// temp-dir session store here.
    pub fn with_parts(api: Arc<dyn ApiService>, session_store: SessionStore) -> Self {
        let (event_tx, event_rx) = unbounded();

        App {
            state: Arc::new(RwLock::new(AppState::new(api))),
            event_rx,
            event_tx,
            session_store,
        }
    }

    pub(crate) fn event_tx(&self) -> Sender<AppEvent> {
        self.event_tx.clone()
    }

    /// Try to resume a stored session.
    ///
    /// With a valid unexpired token on disk: installs it, jumps straight to
    /// Home, and starts a refresh cycle. Returns whether a session was
    /// restored. The stored token carries no display name, so `user` starts
    /// with an empty one until the next login response fills it.
    pub fn restore_session(&mut self) -> bool {
        let Some(token) = self.session_store.load() else {
            tracing::info!("No stored session");
            return false;
        };

        tracing::info!(email = %token.user_email, "Restored session from disk");
        {
            let mut state = self.state.write();
            state.user = Some(User {
                uuid: token.uuid,
                name: String::new(),
                email: token.user_email.clone(),
            });
            state.session = Some(token);
            state.nav.replace(Screen::Home);
        }

        tasks::refresh::refresh_all(self.state.clone(), self.event_tx());
        true
    }

    /// Drain and apply all pending events without blocking.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Await the next event. `None` only when all senders are gone.
    pub async fn next_event(&self) -> Option<AppEvent> {
        self.event_rx.recv().await.ok()
    }

    /// Apply one async task result to state.
    pub fn handle_event(&mut self, event: AppEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    /// Provide the device push notification token once the platform has one.
    pub fn set_device_token(&mut self, token: String) {
        self.state.write().device_token = Some(token);
    }

    /// Start a data refresh cycle by hand.
    pub fn refresh(&mut self) {
        tasks::refresh::refresh_all(self.state.clone(), self.event_tx());
    }

    // ========== Action methods - delegating to handlers ==========

    /// Handle login submission.
    pub fn handle_login(&mut self, email: String, password: String) {
        handlers::auth::handle_login(self.state.clone(), self.event_tx(), email, password);
    }

    /// Handle signup submission.
    pub fn handle_signup(&mut self, email: String, name: String, password: String) {
        handlers::auth::handle_signup(self.state.clone(), self.event_tx(), email, name, password);
    }

    /// Handle logout.
    pub fn handle_logout(&mut self) {
        handlers::auth::handle_logout(self.state.clone(), &self.session_store, self.event_tx());
    }

    /// Navigate to a screen.
    pub fn goto(&mut self, screen: Screen) {
        handlers::navigation::handle_goto(self.state.clone(), screen);
    }

    /// Return to the previous screen.
    pub fn back(&mut self) {
        handlers::navigation::handle_back(self.state.clone());
    }

    /// Forget navigation history.
    pub fn clear_history(&mut self) {
        handlers::navigation::handle_clear(self.state.clone());
    }

    /// Open a group's detail screen.
    pub fn handle_view_group(&mut self, group: Group) {
        handlers::groups::handle_view_group(self.state.clone(), group);
    }

    /// Join a group.
    pub fn handle_join_group(&mut self, group_uuid: Uuid) {
        handlers::groups::handle_join_group(self.state.clone(), self.event_tx(), group_uuid);
    }

    /// Leave a group.
    pub fn handle_leave_group(&mut self, group_uuid: Uuid) {
        handlers::groups::handle_leave_group(self.state.clone(), self.event_tx(), group_uuid);
    }

    /// Create a group.
    pub fn handle_create_group(&mut self, name: String) {
        handlers::groups::handle_create_group(self.state.clone(), self.event_tx(), name);
    }

    /// Open the draft screen for a target.
    pub fn handle_open_draft(&mut self, target: DraftTarget) {
        handlers::messages::handle_open_draft(self.state.clone(), self.event_tx(), target);
    }

    /// Send the drafted message.
    pub fn handle_send_message(&mut self, emojis: String, location: String) {
        handlers::messages::handle_send_message(
            self.state.clone(),
            self.event_tx(),
            emojis,
            location,
        );
    }

    /// Acknowledge a message with an emoji reply.
    pub fn handle_ack_message(&mut self, msg_id: Uuid, reply: String) {
        handlers::messages::handle_ack_message(self.state.clone(), self.event_tx(), msg_id, reply);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
