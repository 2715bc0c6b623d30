//! # Group Endpoints
//!
//! Listing groups and the join/leave/create operation.

use shared::{
    Group, GroupOpKind, GroupRequest, ListGroupKind, ListGroupRequest, ListGroupResponse,
    LoginToken, Uuid,
};

use super::client::ApiClient;
use super::people::MAX_LIST_AMOUNT;
use crate::core::error::ApiError;

/// List groups, filtered by the caller's membership.
///
/// The server sends `{"groups": null}` when the partition is empty; that is
/// normalized to an empty vector here so callers never see null.
pub async fn list_groups(
    client: &ApiClient,
    token: LoginToken,
    amount: u32,
    kind: ListGroupKind,
) -> Result<Vec<Group>, ApiError> {
    let request = ListGroupRequest {
        amount: amount.min(MAX_LIST_AMOUNT),
        kind,
        login_token: token,
    };

    let response: ListGroupResponse = client.post_json("/api/v1/list_groups/", &request).await?;
    Ok(response.groups.unwrap_or_default())
}

/// Join, leave, or create a group.
///
/// Requests that cannot possibly succeed are dropped before any network
/// traffic: `Ok(None)` means create was asked for with an empty name, or
/// join/leave with the invalid uuid. `Ok(Some(()))` means the server
/// accepted the operation.
pub async fn group_op(
    client: &ApiClient,
    token: LoginToken,
    kind: GroupOpKind,
    group_name: String,
    group_uuid: Uuid,
) -> Result<Option<()>, ApiError> {
    match kind {
        GroupOpKind::Create if group_name.is_empty() => {
            tracing::debug!("Dropping create with empty group name");
            return Ok(None);
        }
        GroupOpKind::Join | GroupOpKind::Leave if group_uuid.is_invalid() => {
            tracing::debug!(kind = ?kind, "Dropping group op without a target group");
            return Ok(None);
        }
        _ => {}
    }

    let request = GroupRequest {
        login_token: token,
        kind,
        group_name,
        group_uuid,
    };

    client.post_unit("/api/v1/groups/", &request).await?;
    Ok(Some(()))
}

/// Join an existing group by uuid.
pub async fn join_group(
    client: &ApiClient,
    token: LoginToken,
    group_uuid: Uuid,
) -> Result<Option<()>, ApiError> {
    group_op(client, token, GroupOpKind::Join, String::new(), group_uuid).await
}

/// Leave a group the caller belongs to.
pub async fn leave_group(
    client: &ApiClient,
    token: LoginToken,
    group_uuid: Uuid,
) -> Result<Option<()>, ApiError> {
    group_op(client, token, GroupOpKind::Leave, String::new(), group_uuid).await
}

/// Create a new group and join it.
pub async fn create_group(
    client: &ApiClient,
    token: LoginToken,
    group_name: String,
) -> Result<Option<()>, ApiError> {
    group_op(
        client,
        token,
        GroupOpKind::Create,
        group_name,
        shared::INVALID_UUID,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    // The fast-fail paths return before any request is built, so these run
    // against an unroutable server without touching the network.

    #[tokio::test]
    async fn test_create_with_empty_name_short_circuits() {
        let client = ApiClient::with_base_url("http://[100::1]:9");
        let result = create_group(&client, LoginToken::default(), String::new()).await;
        assert_eq!(result, Ok(None));
    }

    #[tokio::test]
    async fn test_join_without_target_short_circuits() {
        let client = ApiClient::with_base_url("http://[100::1]:9");
        let result = join_group(&client, LoginToken::default(), shared::INVALID_UUID).await;
        assert_eq!(result, Ok(None));

        let result = leave_group(&client, LoginToken::default(), shared::INVALID_UUID).await;
        assert_eq!(result, Ok(None));
    }

    #[test]
    fn test_group_request_wire_shape() {
        let request = GroupRequest {
            login_token: LoginToken::default(),
            kind: GroupOpKind::Create,
            group_name: "lunch crew".to_string(),
            group_uuid: shared::INVALID_UUID,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["kind"], 2);
        assert_eq!(json["groupName"], "lunch crew");
    }
}
