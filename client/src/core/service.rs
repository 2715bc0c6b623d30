//! # API Service Trait
//!
//! Service trait abstracting the backend API for dependency injection.
//!
//! The concrete implementation is [`crate::services::api::ApiClient`]; tests
//! substitute mock implementations to drive the orchestrator without a
//! network.

use async_trait::async_trait;
use shared::{
    Group, GroupOpKind, ListGroupKind, ListPeopleKind, LoginResponse, LoginToken, Message,
    PushTokenKind, RecipientKind, RecvMsgResponse, User, Uuid,
};

use crate::core::error::ApiError;

/// Backend API operations.
///
/// Every method maps to one backend endpoint. Server rejections come back as
/// `Err(ApiError::Status { .. })`; `Result<Option<()>, _>` methods return
/// `Ok(None)` when client-side validation stopped the call before any
/// request was made.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Log in with email and an already-hashed password.
    async fn login(&self, email: String, password: String) -> Result<LoginResponse, ApiError>;

    /// Register a new account and log it in.
    async fn signup(
        &self,
        email: String,
        name: String,
        password: String,
    ) -> Result<LoginResponse, ApiError>;

    /// List users, filtered by friendship relative to the caller.
    async fn list_people(
        &self,
        token: LoginToken,
        amount: u32,
        kind: ListPeopleKind,
    ) -> Result<Vec<User>, ApiError>;

    /// List groups, filtered by the caller's membership.
    async fn list_groups(
        &self,
        token: LoginToken,
        amount: u32,
        kind: ListGroupKind,
    ) -> Result<Vec<Group>, ApiError>;

    /// Join, leave, or create a group.
    async fn group_op(
        &self,
        token: LoginToken,
        kind: GroupOpKind,
        group_name: String,
        group_uuid: Uuid,
    ) -> Result<Option<()>, ApiError>;

    /// Send a message to a group or a friend.
    async fn send_msg(
        &self,
        token: LoginToken,
        message: Message,
        recipient_kind: RecipientKind,
        to: Uuid,
    ) -> Result<(), ApiError>;

    /// Fetch pending messages and replies for the caller.
    async fn recv_msg(
        &self,
        token: LoginToken,
        delete_old: bool,
    ) -> Result<RecvMsgResponse, ApiError>;

    /// Acknowledge a received message with an emoji reply.
    async fn ack_msg(&self, token: LoginToken, msg_id: Uuid, reply: String)
        -> Result<(), ApiError>;

    /// Fetch emoji recommendations for the given local time of day.
    async fn recommendations(&self, local_time: f64) -> Result<Vec<String>, ApiError>;

    /// Register or remove a device push notification token.
    async fn push_token(
        &self,
        token: LoginToken,
        device_token: String,
        kind: PushTokenKind,
    ) -> Result<Option<()>, ApiError>;
}
