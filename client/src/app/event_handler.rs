//! # Event Handler
//!
//! Applies async task results to application state.
//!
//! Each event updates only its own slice of state, so the fetches of one
//! refresh cycle can land in any order without stepping on each other.

use shared::{Group, GroupOpKind, ListGroupKind, LoginResponse, PushTokenKind, RecvMsgResponse, User};

use crate::app::state::{Inbox, Screen};
use crate::app::{tasks, App, AppEvent};
use crate::core::error::ApiError;

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::LoginResult(result) => self.handle_session_result("login", result),
            AppEvent::SignupResult(result) => self.handle_session_result("signup", result),
            AppEvent::FriendsResult(result) => self.handle_friends_result(result),
            AppEvent::GroupsResult(kind, result) => self.handle_groups_result(kind, result),
            AppEvent::InboxResult(result) => self.handle_inbox_result(result),
            AppEvent::RecommendationsResult(result) => {
                self.handle_recommendations_result(result)
            }
            AppEvent::GroupOpResult(kind, result) => self.handle_group_op_result(kind, result),
            AppEvent::MessageSent(result) => self.handle_message_sent(result),
            AppEvent::MessageAcked(result) => self.handle_message_acked(result),
            AppEvent::PushTokenResult(result) => self.handle_push_token_result(result),
        }
    }
}

impl App {
    /// Shared tail of login and signup: persist the token, install the
    /// session, move to Home, and start the first refresh cycle.
    ///
    /// On a rejection the form error is set and nothing else changes: the
    /// screen stays put and no token is stored.
    fn handle_session_result(&mut self, op: &str, result: Result<LoginResponse, ApiError>) {
        tracing::info!(op = %op, success = result.is_ok(), "Processing session result");

        match result {
            Ok(response) => {
                self.session_store.save(Some(&response.login_token));

                {
                    let mut state = self.state.write();
                    state.session = Some(response.login_token);
                    state.user = Some(response.user);
                    state.auth_error = None;
                    state.nav.goto(Screen::Home);
                }

                self.register_push_token();
                tasks::refresh::refresh_all(self.state.clone(), self.event_tx());
            }
            Err(e) => {
                self.state.write().auth_error = Some(e.to_string());
            }
        }
    }

    fn register_push_token(&self) {
        let (api, token, device_token) = {
            let state = self.state.read();
            match (
                state.api.clone(),
                state.session.clone(),
                state.device_token.clone(),
            ) {
                (Some(api), Some(token), Some(device)) => (api, token, device),
                _ => return,
            }
        };

        let tx = self.event_tx();
        tokio::spawn(async move {
            let result = api.push_token(token, device_token, PushTokenKind::Add).await;
            let _ = tx.send(AppEvent::PushTokenResult(result)).await;
        });
    }

    fn handle_friends_result(&mut self, result: Result<Vec<User>, ApiError>) {
        let mut state = self.state.write();
        match result {
            Ok(friends) => {
                tracing::debug!(count = friends.len(), "Friends list updated");
                state.friends = friends;
            }
            Err(e) => {
                // Keep whatever we last fetched.
                tracing::warn!(error = %e, "Failed to fetch friends");
                state.notify_error(e.to_string());
            }
        }
    }

    fn handle_groups_result(&mut self, kind: ListGroupKind, result: Result<Vec<Group>, ApiError>) {
        let mut state = self.state.write();
        let slice = match kind {
            ListGroupKind::All => &mut state.all_groups,
            ListGroupKind::Joined => &mut state.joined_groups,
            ListGroupKind::NotJoined => &mut state.not_joined_groups,
        };

        match result {
            Ok(groups) => {
                tracing::debug!(kind = ?kind, count = groups.len(), "Group partition updated");
                *slice = groups;
            }
            Err(e) => {
                // A failed partition fetch leaves nothing stale behind.
                *slice = Vec::new();
                tracing::warn!(kind = ?kind, error = %e, "Failed to fetch groups");
                state.notify_error(e.to_string());
            }
        }
    }

    fn handle_inbox_result(&mut self, result: Result<RecvMsgResponse, ApiError>) {
        let mut state = self.state.write();
        match result {
            Ok(response) => {
                let Some(user) = state.user.clone() else {
                    tracing::debug!("Dropping inbox response without a signed-in user");
                    return;
                };
                state.inbox = Inbox::partition(response, &user);
                tracing::debug!(
                    to_acknowledge = state.inbox.to_acknowledge.len(),
                    sent_replies = state.inbox.sent_replies.len(),
                    received_replies = state.inbox.received_replies.len(),
                    "Inbox updated"
                );
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch inbox");
                state.notify_error(e.to_string());
            }
        }
    }

    fn handle_recommendations_result(&mut self, result: Result<Vec<String>, ApiError>) {
        let mut state = self.state.write();
        match result {
            Ok(recommendations) => state.recommendations = recommendations,
            Err(e) => {
                // The draft screen works without recommendations.
                tracing::warn!(error = %e, "Failed to fetch recommendations");
                state.notify_error(e.to_string());
            }
        }
    }

    fn handle_group_op_result(&mut self, kind: GroupOpKind, result: Result<Option<()>, ApiError>) {
        match result {
            Ok(Some(())) => {
                tracing::info!(kind = ?kind, "Group operation succeeded");
                self.state.write().nav.back();
                tasks::refresh::refresh_all(self.state.clone(), self.event_tx());
            }
            Ok(None) => {
                tracing::debug!(kind = ?kind, "Group operation dropped before send");
            }
            Err(e) => {
                self.state.write().notify_error(e.to_string());
            }
        }
    }

    fn handle_message_sent(&mut self, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                {
                    let mut state = self.state.write();
                    state.draft_error = None;
                    state.draft_target = None;
                    state.nav.back();
                }
                tasks::refresh::refresh_all(self.state.clone(), self.event_tx());
            }
            Err(e) => {
                // Stay on the draft screen; the emojis are still there.
                self.state.write().notify_error(e.to_string());
            }
        }
    }

    fn handle_message_acked(&mut self, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                self.state.write().draft_error = None;
                tasks::refresh::refresh_all(self.state.clone(), self.event_tx());
            }
            Err(e) => {
                self.state.write().notify_error(e.to_string());
            }
        }
    }

    fn handle_push_token_result(&mut self, result: Result<Option<()>, ApiError>) {
        // Push registration is best-effort; nothing in the UI depends on it.
        match result {
            Ok(Some(())) => tracing::info!("Push token update accepted"),
            Ok(None) => tracing::debug!("Push token update dropped before send"),
            Err(e) => tracing::warn!(error = %e, "Push token update failed"),
        }
    }
}
