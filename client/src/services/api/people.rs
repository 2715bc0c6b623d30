//! # People Endpoints
//!
//! Listing users by friendship relation.

use shared::{ListPeopleKind, ListPeopleRequest, LoginToken, User};

use super::client::ApiClient;
use crate::core::error::ApiError;

/// Most users a single listing request will ask for.
pub const MAX_LIST_AMOUNT: u32 = 50;

/// List users, filtered by their friendship relation to the caller.
///
/// `amount` is clamped to [`MAX_LIST_AMOUNT`] before the request goes out.
/// The response is a bare JSON array, never null.
pub async fn list_people(
    client: &ApiClient,
    token: LoginToken,
    amount: u32,
    kind: ListPeopleKind,
) -> Result<Vec<User>, ApiError> {
    let request = ListPeopleRequest {
        amount: amount.min(MAX_LIST_AMOUNT),
        kind,
        login_token: token,
    };

    client.post_json("/api/v1/list_friends/", &request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_clamp() {
        assert_eq!(500u32.min(MAX_LIST_AMOUNT), 50);
        assert_eq!(10u32.min(MAX_LIST_AMOUNT), 10);
    }

    #[test]
    fn test_kind_serializes_as_integer() {
        let request = ListPeopleRequest {
            amount: 50,
            kind: ListPeopleKind::NotFriends,
            login_token: LoginToken::default(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["kind"], 2);
        assert_eq!(json["amount"], 50);
    }
}
