use crate::backend::{signup_payload, Backend};
use crate::core::error::ServiceError;
use crate::models::api::{ErrorResponse, ItemsResponse, LoginRequest, TokenResponse};
use crate::models::item::{Category, Item, ItemDraft, ItemKind};
use crate::models::user::PublicUser;
use crate::validation::forms::ValidatedSignup;
use anyhow::{Context, Result};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::multipart;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;

/// REST mode: every operation is delegated to a remote lost-and-found API.
/// Credentials are validated server-side and the server issues the bearer
/// token; this side never hashes a password.
pub struct RestBackend {
    client: reqwest::Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct MeResponse {
    user: PublicUser,
}

impl RestBackend {
    pub fn new(endpoint: String, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint, path)
    }

    /// Convert a non-2xx response into the matching ServiceError, keeping
    /// the backend's own error message where it provided one.
    async fn error_from(response: reqwest::Response, fallback: &str) -> ServiceError {
        let status = response.status();
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) if !body.error.is_empty() => body.error,
            _ => fallback.to_string(),
        };

        match status {
            StatusCode::UNAUTHORIZED => ServiceError::Auth(message),
            StatusCode::CONFLICT => ServiceError::Conflict(message),
            StatusCode::BAD_REQUEST => ServiceError::Validation(message),
            _ => ServiceError::Store(message),
        }
    }

    fn send_failed(e: reqwest::Error) -> ServiceError {
        ServiceError::Store(format!("Failed to connect to server: {}", e))
    }

    /// Build the multipart form the item endpoints expect. An uploaded
    /// image travels as a file part; a resolved default travels as text.
    fn item_form(draft: &ItemDraft) -> multipart::Form {
        let mut form = multipart::Form::new()
            .text("contact", draft.contact.clone())
            .text("location", draft.location.clone())
            .text("name", draft.name.clone())
            .text("Category", draft.category.as_str().to_string())
            .text("description", draft.description.clone());

        if let Some(image_url) = &draft.image_url {
            form = match decode_data_url(image_url) {
                Some((mime, bytes)) => {
                    let part = multipart::Part::bytes(bytes.clone()).file_name("upload");
                    let part = part
                        .mime_str(&mime)
                        .unwrap_or_else(|_| multipart::Part::bytes(bytes).file_name("upload"));
                    form.part("imageURL", part)
                }
                None => form.text("imageURL", image_url.clone()),
            };
        }

        form
    }
}

/// Split a `data:<mime>;base64,<payload>` URL back into mime + bytes.
fn decode_data_url(url: &str) -> Option<(String, Vec<u8>)> {
    let rest = url.strip_prefix("data:")?;
    let (mime, payload) = rest.split_once(";base64,")?;
    let bytes = STANDARD.decode(payload).ok()?;
    Some((mime.to_string(), bytes))
}

#[async_trait]
impl Backend for RestBackend {
    async fn signup(&self, signup: &ValidatedSignup) -> Result<PublicUser, ServiceError> {
        let response = self
            .client
            .post(self.url("/api/users/signup"))
            .json(&signup_payload(signup))
            .send()
            .await
            .map_err(Self::send_failed)?;

        if !response.status().is_success() {
            return Err(Self::error_from(response, "Signup failed").await);
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::Store(e.to_string()))?;
        Ok(body.user)
    }

    async fn login(
        &self,
        reg_no: &str,
        password: &str,
    ) -> Result<(String, PublicUser), ServiceError> {
        let response = self
            .client
            .post(self.url("/api/users/login"))
            .json(&LoginRequest {
                reg_no: reg_no.to_string(),
                password: password.to_string(),
            })
            .send()
            .await
            .map_err(Self::send_failed)?;

        if !response.status().is_success() {
            return Err(Self::error_from(response, "Login failed").await);
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::Store(e.to_string()))?;
        Ok((body.token, body.user))
    }

    async fn invalidate(&self, token: &str) -> Result<(), ServiceError> {
        let response = self
            .client
            .post(self.url("/api/users/logout"))
            .bearer_auth(token)
            .send()
            .await
            .map_err(Self::send_failed)?;

        if !response.status().is_success() {
            return Err(Self::error_from(response, "Logout failed").await);
        }

        Ok(())
    }

    async fn current_user(&self, token: &str) -> Result<PublicUser, ServiceError> {
        let response = self
            .client
            .get(self.url("/api/users/me"))
            .bearer_auth(token)
            .send()
            .await
            .map_err(Self::send_failed)?;

        if !response.status().is_success() {
            return Err(Self::error_from(response, "Failed to get user info").await);
        }

        let body: MeResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::Store(e.to_string()))?;
        Ok(body.user)
    }

    async fn fetch_items(&self, kind: ItemKind) -> Result<Vec<Item>, ServiceError> {
        let response = self
            .client
            .get(self.url(&format!("/api/{}", kind.collection())))
            .send()
            .await
            .map_err(Self::send_failed)?;

        if !response.status().is_success() {
            return Err(Self::error_from(response, "Failed to fetch items").await);
        }

        let body: ItemsResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::Store(e.to_string()))?;
        Ok(body.items)
    }

    async fn insert_item(
        &self,
        draft: &ItemDraft,
        kind: ItemKind,
        token: &str,
    ) -> Result<Item, ServiceError> {
        let response = self
            .client
            .post(self.url(&format!("/api/{}", kind.collection())))
            .bearer_auth(token)
            .multipart(Self::item_form(draft))
            .send()
            .await
            .map_err(Self::send_failed)?;

        if !response.status().is_success() {
            return Err(Self::error_from(response, "Error adding item").await);
        }

        response
            .json()
            .await
            .map_err(|e| ServiceError::Store(e.to_string()))
    }

    async fn category_default_image(
        &self,
        _category: Category,
    ) -> Result<Option<String>, ServiceError> {
        // The REST surface manages defaults server-side; submission falls
        // through to the bundled asset when no file was uploaded.
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_data_url() {
        let (mime, bytes) = decode_data_url("data:image/jpeg;base64,aGVsbG8=").unwrap();
        assert_eq!(mime, "image/jpeg");
        assert_eq!(bytes, b"hello");
    }

    #[test]
    fn test_decode_data_url_rejects_plain_urls() {
        assert!(decode_data_url("https://cdn/wallet.jpeg").is_none());
        assert!(decode_data_url("data:image/jpeg,notbase64marker").is_none());
    }

    #[test]
    fn test_endpoint_trailing_slash_is_trimmed() {
        let backend = RestBackend::new("https://api.example.com/".to_string(), 30).unwrap();
        assert_eq!(
            backend.url("/api/users/login"),
            "https://api.example.com/api/users/login"
        );
    }
}
