//! # Group Handlers
//!
//! Handlers for viewing, joining, leaving, and creating groups.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use shared::{Group, GroupOpKind, Uuid};

use crate::app::events::AppEvent;
use crate::app::state::{AppState, Screen};
use crate::utils::validation;

/// Open a group's detail screen.
pub(crate) fn handle_view_group(state: Arc<RwLock<AppState>>, group: Group) {
    let mut state = state.write();
    state.viewing_group = Some(group);
    state.nav.goto(Screen::ViewGroup);
}

/// Join the group identified by `group_uuid`.
pub(crate) fn handle_join_group(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    group_uuid: Uuid,
) {
    spawn_group_op(state, event_tx, GroupOpKind::Join, String::new(), group_uuid);
}

/// Leave the group identified by `group_uuid`.
pub(crate) fn handle_leave_group(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    group_uuid: Uuid,
) {
    spawn_group_op(state, event_tx, GroupOpKind::Leave, String::new(), group_uuid);
}

/// Create a new group named `name` and join it.
pub(crate) fn handle_create_group(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    name: String,
) {
    let name_check = validation::validate_group_name(&name);
    if !name_check.is_valid {
        if let Some(error) = name_check.error {
            state.write().notify_error(error);
        }
        return;
    }

    spawn_group_op(
        state,
        event_tx,
        GroupOpKind::Create,
        name.trim().to_string(),
        shared::INVALID_UUID,
    );
}

fn spawn_group_op(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    kind: GroupOpKind,
    group_name: String,
    group_uuid: Uuid,
) {
    let (api, token) = {
        let state = state.read();
        match (state.api.clone(), state.session.clone()) {
            (Some(api), Some(token)) => (api, token),
            _ => {
                tracing::warn!(kind = ?kind, "Group operation without a session");
                return;
            }
        }
    };

    tokio::spawn(async move {
        let result = api.group_op(token, kind, group_name, group_uuid).await;
        let _ = event_tx.send(AppEvent::GroupOpResult(kind, result)).await;
    });
}
