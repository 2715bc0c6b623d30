//! # Data Refresh Tasks
//!
//! The refresh cycle that keeps friends, groups, and the inbox current.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use shared::{ListGroupKind, ListPeopleKind};
use tokio::spawn;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::services::api::people::MAX_LIST_AMOUNT;

/// Kick off one full refresh cycle.
///
/// Spawns five independent fetches: friends, the three group partitions,
/// and the inbox. Each completes as its own [`AppEvent`] and updates only
/// its own slice of state, so completions may interleave arbitrarily and a
/// failed fetch never aborts its siblings.
///
/// No-op without a live session.
pub(crate) fn refresh_all(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (token, api) = {
        let state = state.read();
        match (state.session.clone(), state.api.clone()) {
            (Some(token), Some(api)) => (token, api),
            _ => {
                tracing::debug!("Skipping refresh without a session");
                return;
            }
        }
    };

    tracing::info!("Starting data refresh cycle");

    {
        let api = api.clone();
        let token = token.clone();
        let tx = event_tx.clone();
        spawn(async move {
            let result = api
                .list_people(token, MAX_LIST_AMOUNT, ListPeopleKind::All)
                .await;
            let _ = tx.send(AppEvent::FriendsResult(result)).await;
        });
    }

    for kind in [
        ListGroupKind::All,
        ListGroupKind::Joined,
        ListGroupKind::NotJoined,
    ] {
        let api = api.clone();
        let token = token.clone();
        let tx = event_tx.clone();
        spawn(async move {
            let result = api.list_groups(token, MAX_LIST_AMOUNT, kind).await;
            let _ = tx.send(AppEvent::GroupsResult(kind, result)).await;
        });
    }

    spawn(async move {
        let result = api.recv_msg(token, false).await;
        let _ = event_tx.send(AppEvent::InboxResult(result)).await;
    });
}
