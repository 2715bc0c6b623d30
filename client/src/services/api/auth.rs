//! # Authentication Endpoints
//!
//! Handles account creation and login.
//!
//! Passwords never leave the device in the clear: both endpoints hash them
//! with SHA-256 before the request is built, and the backend only ever sees
//! the hex digest.

use sha2::{Digest, Sha256};
use shared::{LoginRequest, LoginResponse, SignUpRequest};

use super::client::ApiClient;
use crate::core::error::ApiError;

/// Hash a plaintext password into the lowercase hex digest the backend stores.
pub fn hash_password(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    let mut out = String::with_capacity(digest.len() * 2);
    for byte in digest {
        out.push_str(&format!("{byte:02x}"));
    }
    out
}

/// Log in with email and password.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn login(
    client: &ApiClient,
    email: String,
    password: String,
) -> Result<LoginResponse, ApiError> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let request = LoginRequest {
        email,
        hashed_password: hash_password(&password),
    };

    let result = client
        .post_json::<_, LoginResponse>("/api/v1/login/", &request)
        .await;

    match &result {
        Ok(_) => tracing::info!(duration_ms = start.elapsed().as_millis(), "Login successful"),
        Err(e) => tracing::warn!(duration_ms = start.elapsed().as_millis(), error = %e, "Login failed"),
    }
    result
}

/// Sign up a new account. A successful response includes a login token, so
/// no separate login call is needed afterwards.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn signup(
    client: &ApiClient,
    email: String,
    name: String,
    password: String,
) -> Result<LoginResponse, ApiError> {
    let request = SignUpRequest {
        email,
        name,
        hashed_password: hash_password(&password),
    };

    client.post_json("/api/v1/sign_up/", &request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password_is_sha256_hex() {
        assert_eq!(
            hash_password("p"),
            "148de9c5a7a44d19e56cd9ae1a554bf67847afb0c58f6e12fa29ac7ddfca9940"
        );
    }

    #[test]
    fn test_hash_password_is_lowercase_and_fixed_length() {
        let digest = hash_password("correct horse");
        assert_eq!(digest.len(), 64);
        assert_eq!(digest, digest.to_lowercase());
        assert_eq!(
            digest,
            "4104d36f8da2c254349f85836793ebe029e0c957063a34c91c2e9203187b5631"
        );
    }

    #[test]
    fn test_login_request_carries_digest_not_plaintext() {
        let request = LoginRequest {
            email: "a@b.com".to_string(),
            hashed_password: hash_password("hunter2"),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("hunter2"));
        assert!(json.contains("hashedPassword"));
    }
}
