//! # API Client
//!
//! Main HTTP client for backend API communication.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::error::ApiError;
use crate::core::service::ApiService;
use shared::{
    Group, GroupOpKind, ListGroupKind, ListPeopleKind, LoginResponse, LoginToken, Message,
    PushTokenKind, RecipientKind, RecvMsgResponse, User, Uuid,
};

/// Base URL for the backend API server
const API_BASE_URL: &str = "http://127.0.0.1:8080";

/// HTTP client for communicating with the backend API server.
///
/// Wraps a [`reqwest::Client`] with a fixed timeout and a base URL. All
/// endpoints go through [`ApiClient::post_json`], which maps the three
/// failure classes onto [`ApiError`] variants.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with default configuration.
    ///
    /// The client is configured with a 10 second timeout so a dead backend
    /// surfaces as an error instead of a hang.
    pub fn new() -> Self {
        Self::with_base_url(API_BASE_URL)
    }

    /// Create a client pointed at a non-default server (tests, staging).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// POST a JSON body to `path` and decode a JSON response.
    ///
    /// - transport failure becomes [`ApiError::Network`]
    /// - a status outside `[200, 300)` becomes [`ApiError::Status`] carrying
    ///   the raw response body
    /// - an undecodable success body becomes [`ApiError::Decode`]
    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(path = %path, error = %e, "Request failed to complete");
                ApiError::Network(e.to_string())
            })?;

        let status = response.status();
        if status.is_success() {
            response.json::<T>().await.map_err(|e| {
                tracing::error!(path = %path, error = %e, "Response parse error");
                ApiError::Decode(e.to_string())
            })
        } else {
            let msg = response.text().await.unwrap_or_default();
            tracing::warn!(path = %path, status = status.as_u16(), msg = %msg, "Server rejected request");
            Err(ApiError::Status {
                status: status.as_u16(),
                msg,
            })
        }
    }

    /// POST a JSON body to `path`, discarding any success body.
    ///
    /// For endpoints whose 200 response carries nothing the client needs.
    pub(crate) async fn post_unit<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(path = %path, error = %e, "Request failed to complete");
                ApiError::Network(e.to_string())
            })?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let msg = response.text().await.unwrap_or_default();
            tracing::warn!(path = %path, status = status.as_u16(), msg = %msg, "Server rejected request");
            Err(ApiError::Status {
                status: status.as_u16(),
                msg,
            })
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

// Implement ApiService trait for ApiClient
#[async_trait::async_trait]
impl ApiService for ApiClient {
    async fn login(&self, email: String, password: String) -> Result<LoginResponse, ApiError> {
        crate::services::api::auth::login(self, email, password).await
    }

    async fn signup(
        &self,
        email: String,
        name: String,
        password: String,
    ) -> Result<LoginResponse, ApiError> {
        crate::services::api::auth::signup(self, email, name, password).await
    }

    async fn list_people(
        &self,
        token: LoginToken,
        amount: u32,
        kind: ListPeopleKind,
    ) -> Result<Vec<User>, ApiError> {
        crate::services::api::people::list_people(self, token, amount, kind).await
    }

    async fn list_groups(
        &self,
        token: LoginToken,
        amount: u32,
        kind: ListGroupKind,
    ) -> Result<Vec<Group>, ApiError> {
        crate::services::api::groups::list_groups(self, token, amount, kind).await
    }

    async fn group_op(
        &self,
        token: LoginToken,
        kind: GroupOpKind,
        group_name: String,
        group_uuid: Uuid,
    ) -> Result<Option<()>, ApiError> {
        crate::services::api::groups::group_op(self, token, kind, group_name, group_uuid).await
    }

    async fn send_msg(
        &self,
        token: LoginToken,
        message: Message,
        recipient_kind: RecipientKind,
        to: Uuid,
    ) -> Result<(), ApiError> {
        crate::services::api::messages::send_msg(self, token, message, recipient_kind, to).await
    }

    async fn recv_msg(
        &self,
        token: LoginToken,
        delete_old: bool,
    ) -> Result<RecvMsgResponse, ApiError> {
        crate::services::api::messages::recv_msg(self, token, delete_old).await
    }

    async fn ack_msg(
        &self,
        token: LoginToken,
        msg_id: Uuid,
        reply: String,
    ) -> Result<(), ApiError> {
        crate::services::api::messages::ack_msg(self, token, msg_id, reply).await
    }

    async fn recommendations(&self, local_time: f64) -> Result<Vec<String>, ApiError> {
        crate::services::api::messages::recommendations(self, local_time).await
    }

    async fn push_token(
        &self,
        token: LoginToken,
        device_token: String,
        kind: PushTokenKind,
    ) -> Result<Option<()>, ApiError> {
        crate::services::api::push::push_token(self, token, device_token, kind).await
    }
}
