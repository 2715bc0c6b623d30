//! # People Listing Data Transfer Objects

use crate::dto::auth::{LoginToken, User};
use serde::{Deserialize, Serialize};

/// Which slice of the user base to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ListPeopleKind {
    OnlyFriends = 0,
    All = 1,
    NotFriends = 2,
}

impl From<ListPeopleKind> for u8 {
    fn from(kind: ListPeopleKind) -> u8 {
        kind as u8
    }
}

impl TryFrom<u8> for ListPeopleKind {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(ListPeopleKind::OnlyFriends),
            1 => Ok(ListPeopleKind::All),
            2 => Ok(ListPeopleKind::NotFriends),
            other => Err(format!("unknown list-people kind: {other}")),
        }
    }
}

/// Request body for `/api/v1/list_friends/`.
///
/// The response body is a bare JSON array of [`User`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListPeopleRequest {
    pub amount: u32,
    pub kind: ListPeopleKind,
    pub login_token: LoginToken,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::Uuid;

    #[test]
    fn kind_encodes_as_integer() {
        let req = ListPeopleRequest {
            amount: 50,
            kind: ListPeopleKind::All,
            login_token: LoginToken {
                valid_until: 1,
                uuid: Uuid(2),
                user_email: "a@x.edu".into(),
            },
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"kind\":1"));
    }
}
