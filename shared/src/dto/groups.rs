//! # Group Data Transfer Objects
//!
//! Groups are listed in three partitions relative to the requesting user
//! (all, joined, not joined) and mutated through a single endpoint keyed by
//! an operation kind.

use crate::dto::auth::LoginToken;
use crate::wire::Uuid;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A messaging group. `users` maps member uuid to display name. A locked
/// group accepts no new members and is hidden from the not-joined listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Group {
    pub uuid: Uuid,
    pub name: String,
    #[serde(default)]
    pub users: HashMap<Uuid, String>,
    #[serde(default)]
    pub locked: bool,
}

/// Which partition of groups to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ListGroupKind {
    All = 0,
    Joined = 1,
    NotJoined = 2,
}

impl From<ListGroupKind> for u8 {
    fn from(kind: ListGroupKind) -> u8 {
        kind as u8
    }
}

impl TryFrom<u8> for ListGroupKind {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(ListGroupKind::All),
            1 => Ok(ListGroupKind::Joined),
            2 => Ok(ListGroupKind::NotJoined),
            other => Err(format!("unknown list-group kind: {other}")),
        }
    }
}

/// Request body for `/api/v1/list_groups/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListGroupRequest {
    pub amount: u32,
    pub kind: ListGroupKind,
    pub login_token: LoginToken,
}

/// Response body for `/api/v1/list_groups/`. `groups` may be null on the
/// wire when the partition is empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ListGroupResponse {
    #[serde(default)]
    pub groups: Option<Vec<Group>>,
}

/// Group membership mutation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum GroupOpKind {
    Join = 0,
    Leave = 1,
    Create = 2,
}

impl From<GroupOpKind> for u8 {
    fn from(kind: GroupOpKind) -> u8 {
        kind as u8
    }
}

impl TryFrom<u8> for GroupOpKind {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(GroupOpKind::Join),
            1 => Ok(GroupOpKind::Leave),
            2 => Ok(GroupOpKind::Create),
            other => Err(format!("unknown group-op kind: {other}")),
        }
    }
}

/// Request body for `/api/v1/groups/`. Join/leave carry `group_uuid`,
/// create carries `group_name`; the unused field is sent empty/invalid.
/// The response body is ignored by the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GroupRequest {
    pub login_token: LoginToken,
    pub kind: GroupOpKind,
    pub group_name: String,
    pub group_uuid: Uuid,
}
