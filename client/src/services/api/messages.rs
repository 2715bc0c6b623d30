//! # Message Endpoints
//!
//! Sending, receiving, and acknowledging emoji messages, plus time-of-day
//! emoji recommendations.

use shared::{
    AckMsgRequest, LoginToken, Message, RecipientKind, RecommendationRequest,
    RecommendationResponse, RecvMsgRequest, RecvMsgResponse, SendMessageRequest, Uuid,
};

use super::client::ApiClient;
use crate::core::error::ApiError;

/// How long a message lives on the server before it evaporates.
pub const DEFAULT_MESSAGE_TTL_SECS: i64 = 24 * 60 * 60;

/// Build an outgoing message from its user-supplied parts.
///
/// The server fills in `uuid`, `source`, `sent_to`, and `group` on arrival;
/// the client only supplies content and timing.
pub fn draft_message(emojis: String, location: String, local_time: f64) -> Message {
    Message {
        uuid: shared::INVALID_UUID,
        sent_to: String::new(),
        group: shared::INVALID_UUID,
        emojis,
        source: None,
        location,
        sent_at: chrono::Utc::now().timestamp(),
        ttl: DEFAULT_MESSAGE_TTL_SECS,
        local_time,
    }
}

/// Send a message to a group or a friend. Success carries no body.
pub async fn send_msg(
    client: &ApiClient,
    token: LoginToken,
    message: Message,
    recipient_kind: RecipientKind,
    to: Uuid,
) -> Result<(), ApiError> {
    let request = SendMessageRequest {
        message,
        login_token: token,
        recipient_kind,
        to,
    };

    client.post_unit("/api/v1/send_msg/", &request).await
}

/// Fetch pending messages and replies for the caller.
///
/// With `delete_old` set the server drops the pending queues after
/// responding, so the next call starts fresh. Either collection in the
/// response may be null; callers normalize when partitioning.
pub async fn recv_msg(
    client: &ApiClient,
    token: LoginToken,
    delete_old: bool,
) -> Result<RecvMsgResponse, ApiError> {
    let request = RecvMsgRequest {
        login_token: token,
        delete_old,
    };

    client.post_json("/api/v1/recv_msg/", &request).await
}

/// Acknowledge a received message with an emoji reply.
pub async fn ack_msg(
    client: &ApiClient,
    token: LoginToken,
    msg_id: Uuid,
    reply: String,
) -> Result<(), ApiError> {
    let request = AckMsgRequest {
        msg_id,
        reply,
        login_token: token,
    };

    client.post_unit("/api/v1/ack_msg/", &request).await
}

/// Fetch emoji recommendations for the given local time of day.
///
/// Runs unauthenticated. A null recommendation list is normalized to empty.
pub async fn recommendations(client: &ApiClient, local_time: f64) -> Result<Vec<String>, ApiError> {
    let request = RecommendationRequest { local_time };

    let response: RecommendationResponse = client.post_json("/api/v1/recs/", &request).await?;
    Ok(response.recommendations.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_message_leaves_server_fields_unset() {
        let msg = draft_message("🦀🦀🦀".to_string(), "the lab".to_string(), 9.25);
        assert!(msg.uuid.is_invalid());
        assert!(msg.group.is_invalid());
        assert!(msg.source.is_none());
        assert_eq!(msg.emojis, "🦀🦀🦀");
        assert_eq!(msg.ttl, DEFAULT_MESSAGE_TTL_SECS);
        assert!((msg.local_time - 9.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_draft_message_is_not_born_expired() {
        let msg = draft_message("🍜🍜🍜".to_string(), String::new(), 12.0);
        assert!(!msg.expired_at(chrono::Utc::now().timestamp()));
    }
}
