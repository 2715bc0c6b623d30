//! # Push Notification Endpoints
//!
//! Registering and removing device push tokens.

use shared::{LoginToken, PushTokenKind, PushTokenRequest};

use super::client::ApiClient;
use crate::core::error::ApiError;

/// Register or remove a device push notification token.
///
/// An empty device token is dropped before any request is made and reported
/// as `Ok(None)`.
pub async fn push_token(
    client: &ApiClient,
    token: LoginToken,
    device_token: String,
    kind: PushTokenKind,
) -> Result<Option<()>, ApiError> {
    if device_token.is_empty() {
        tracing::debug!(kind = ?kind, "Dropping push token request without a device token");
        return Ok(None);
    }

    let request = PushTokenRequest {
        token: device_token,
        login_token: token,
        kind,
    };

    client.post_unit("/api/v1/push_token/", &request).await?;
    Ok(Some(()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_device_token_short_circuits() {
        let client = ApiClient::with_base_url("http://[100::1]:9");
        let result = push_token(
            &client,
            LoginToken::default(),
            String::new(),
            PushTokenKind::Add,
        )
        .await;
        assert_eq!(result, Ok(None));
    }
}
