//! # Data Transfer Objects
//!
//! Request and response bodies for every endpoint of the messaging API.

pub mod auth;
pub mod groups;
pub mod messages;
pub mod people;
pub mod push;

pub use auth::{LoginRequest, LoginResponse, LoginToken, SignUpRequest, User};
pub use groups::{Group, GroupOpKind, GroupRequest, ListGroupKind, ListGroupRequest, ListGroupResponse};
pub use messages::{
    AckMsgRequest, Message, MessageReply, RecipientKind, RecommendationRequest,
    RecommendationResponse, RecvMsgRequest, RecvMsgResponse, SendMessageRequest,
};
pub use people::{ListPeopleKind, ListPeopleRequest};
pub use push::{PushTokenKind, PushTokenRequest};
