//! # Message Data Transfer Objects
//!
//! An emoji message is immutable once sent: exactly three emoji, an
//! optional human-readable location, a send timestamp with a time-to-live,
//! and the sender's local clock position as fractional hours (used by the
//! recommendation engine). Replies reference the original message in full
//! so the sender can see what they reacted to.

use crate::dto::auth::{LoginToken, User};
use crate::wire::{f64_string, i64_string, Uuid};
use serde::{Deserialize, Serialize};

/// An emoji message between a user and a group or friend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(default)]
    pub uuid: Uuid,
    /// Display name of the recipient (group or user).
    #[serde(default)]
    pub sent_to: String,
    /// Group this was sent to, or the invalid uuid for direct messages.
    #[serde(rename = "groupSentTo", default, skip_serializing_if = "Uuid::is_invalid")]
    pub group: Uuid,
    pub emojis: String,
    #[serde(default)]
    pub source: Option<User>,
    #[serde(default)]
    pub location: String,
    #[serde(with = "i64_string")]
    pub sent_at: i64,
    /// Seconds this message lives after `sent_at`.
    #[serde(with = "i64_string")]
    pub ttl: i64,
    /// 0-24 fractional hour in the sender's local timezone.
    #[serde(with = "f64_string")]
    pub local_time: f64,
}

impl Message {
    /// Whether the message has outlived its time-to-live at `now` (unix
    /// seconds).
    pub fn expired_at(&self, now: i64) -> bool {
        self.sent_at + self.ttl < now
    }
}

/// A recipient's emoji reaction to a [`Message`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MessageReply {
    pub message: Option<Message>,
    #[serde(default, skip_serializing_if = "Uuid::is_invalid")]
    pub group: Uuid,
    /// What the original sender wrote, echoed for display.
    #[serde(default)]
    pub original_content: String,
    pub reply: String,
    pub from: User,
    #[serde(with = "i64_string", default)]
    pub sent_at: i64,
}

/// Whether a message is addressed to a group or a single friend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum RecipientKind {
    Group = 0,
    Friend = 1,
}

impl From<RecipientKind> for u8 {
    fn from(kind: RecipientKind) -> u8 {
        kind as u8
    }
}

impl TryFrom<u8> for RecipientKind {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(RecipientKind::Group),
            1 => Ok(RecipientKind::Friend),
            other => Err(format!("unknown recipient kind: {other}")),
        }
    }
}

/// Request body for `/api/v1/send_msg/`. Response is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub message: Message,
    pub login_token: LoginToken,
    pub recipient_kind: RecipientKind,
    pub to: Uuid,
}

/// Request body for `/api/v1/recv_msg/`. With `delete_old` set the server
/// clears the caller's pending queues once the response is written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecvMsgRequest {
    pub login_token: LoginToken,
    pub delete_old: bool,
}

/// Response body for `/api/v1/recv_msg/`. Either collection may be null on
/// the wire; callers must normalize to empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RecvMsgResponse {
    #[serde(default)]
    pub new_messages: Option<Vec<Message>>,
    #[serde(default)]
    pub new_replies: Option<Vec<MessageReply>>,
}

/// Request body for `/api/v1/ack_msg/`. Response is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AckMsgRequest {
    #[serde(rename = "msgID")]
    pub msg_id: Uuid,
    pub reply: String,
    pub login_token: LoginToken,
}

/// Request body for `/api/v1/recs/`. Unauthenticated; recommendations are
/// keyed only off the local clock.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    #[serde(with = "f64_string")]
    pub local_time: f64,
}

/// Response body for `/api/v1/recs/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RecommendationResponse {
    #[serde(default)]
    pub recommendations: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(sent_at: i64, ttl: i64) -> Message {
        Message {
            uuid: Uuid(5),
            sent_to: "brunch".into(),
            group: Uuid(9),
            emojis: "🥞🍳🥓".into(),
            source: Some(User {
                uuid: Uuid(17),
                name: "yx".into(),
                email: "yx@x.edu".into(),
            }),
            location: String::new(),
            sent_at,
            ttl,
            local_time: 9.25,
        }
    }

    #[test]
    fn message_expiry() {
        let msg = message(1000, 60);
        assert!(!msg.expired_at(1060));
        assert!(msg.expired_at(1061));
    }

    #[test]
    fn message_wire_numbers_are_strings() {
        let json = serde_json::to_string(&message(1000, 60)).unwrap();
        assert!(json.contains("\"sentAt\":\"1000\""));
        assert!(json.contains("\"ttl\":\"60\""));
        assert!(json.contains("\"localTime\":\"9.25\""));
        assert!(json.contains("\"groupSentTo\":\"9\""));
    }

    #[test]
    fn direct_message_omits_group() {
        let mut msg = message(0, 0);
        msg.group = Uuid(0);
        let json = serde_json::to_string(&msg).unwrap();
        assert!(!json.contains("groupSentTo"));
    }

    #[test]
    fn recv_response_null_collections() {
        let resp: RecvMsgResponse =
            serde_json::from_str(r#"{"newMessages":null,"newReplies":null}"#).unwrap();
        assert!(resp.new_messages.is_none());
        assert!(resp.new_replies.is_none());
    }

    #[test]
    fn ack_request_field_casing() {
        let req = AckMsgRequest {
            msg_id: Uuid(3),
            reply: "👍".into(),
            login_token: LoginToken {
                valid_until: 1,
                uuid: Uuid(2),
                user_email: "a@x.edu".into(),
            },
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"msgID\":\"3\""));
        assert!(json.contains("\"loginToken\""));
    }
}
