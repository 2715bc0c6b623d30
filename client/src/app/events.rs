//! # Application Events
//!
//! Event types carrying async task results back to the driving thread.

use shared::{Group, GroupOpKind, ListGroupKind, LoginResponse, RecvMsgResponse, User};

use crate::core::error::ApiError;

/// Async task results sent to the driving thread.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Login completed
    LoginResult(Result<LoginResponse, ApiError>),
    /// Signup completed
    SignupResult(Result<LoginResponse, ApiError>),
    /// Friends list fetch completed
    FriendsResult(Result<Vec<User>, ApiError>),
    /// One group partition fetch completed
    GroupsResult(ListGroupKind, Result<Vec<Group>, ApiError>),
    /// Inbox fetch completed
    InboxResult(Result<RecvMsgResponse, ApiError>),
    /// Recommendation fetch completed
    RecommendationsResult(Result<Vec<String>, ApiError>),
    /// Group join/leave/create completed (`Ok(None)` = dropped before send)
    GroupOpResult(GroupOpKind, Result<Option<()>, ApiError>),
    /// Message send completed
    MessageSent(Result<(), ApiError>),
    /// Message acknowledgement completed
    MessageAcked(Result<(), ApiError>),
    /// Push token registration/removal completed
    PushTokenResult(Result<Option<()>, ApiError>),
}
