//! # Message Handlers
//!
//! Handlers for drafting, sending, and acknowledging emoji messages.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use shared::{RecipientKind, Uuid};

use crate::app::events::AppEvent;
use crate::app::state::{AppState, DraftTarget, Screen};
use crate::services::api::messages::draft_message;
use crate::utils::{time, validation};

/// Open the draft screen addressed to `target` and fetch emoji
/// recommendations for the current time of day.
pub(crate) fn handle_open_draft(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    target: DraftTarget,
) {
    let api = {
        let mut state = state.write();
        state.draft_target = Some(target);
        state.draft_error = None;
        state.nav.goto(Screen::DraftMsg);
        state.api.clone()
    };

    if let Some(api) = api {
        tokio::spawn(async move {
            let result = api.recommendations(time::local_fractional_hour()).await;
            let _ = event_tx.send(AppEvent::RecommendationsResult(result)).await;
        });
    }
}

/// Send the drafted emojis to the current draft target.
pub(crate) fn handle_send_message(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    emojis: String,
    location: String,
) {
    let emoji_check = validation::validate_emojis(&emojis);
    if !emoji_check.is_valid {
        state.write().draft_error = emoji_check.error;
        return;
    }

    let (api, token, target) = {
        let state = state.read();
        match (
            state.api.clone(),
            state.session.clone(),
            state.draft_target.clone(),
        ) {
            (Some(api), Some(token), Some(target)) => (api, token, target),
            _ => {
                tracing::warn!("Send without a session or draft target");
                return;
            }
        }
    };

    let recipient_kind = match &target {
        DraftTarget::Group(_) => RecipientKind::Group,
        DraftTarget::Friend(_) => RecipientKind::Friend,
    };
    let to = target.uuid();
    let message = draft_message(emojis, location, time::local_fractional_hour());

    tokio::spawn(async move {
        let result = api.send_msg(token, message, recipient_kind, to).await;
        let _ = event_tx.send(AppEvent::MessageSent(result)).await;
    });
}

/// Acknowledge a received message with an emoji reply.
pub(crate) fn handle_ack_message(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    msg_id: Uuid,
    reply: String,
) {
    let reply_check = validation::validate_emojis(&reply);
    if !reply_check.is_valid {
        state.write().draft_error = reply_check.error;
        return;
    }

    let (api, token) = {
        let state = state.read();
        match (state.api.clone(), state.session.clone()) {
            (Some(api), Some(token)) => (api, token),
            _ => {
                tracing::warn!("Ack without a session");
                return;
            }
        }
    };

    tokio::spawn(async move {
        let result = api.ack_msg(token, msg_id, reply).await;
        let _ = event_tx.send(AppEvent::MessageAcked(result)).await;
    });
}
