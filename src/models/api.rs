use crate::models::item::Item;
use crate::models::user::PublicUser;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/users/login`.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub reg_no: String,
    pub password: String,
}

/// Successful login: bearer token plus the sanitized user.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
    pub user: PublicUser,
}

/// Wrapper for `GET /api/users/me` and signup responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub success: bool,
    pub user: PublicUser,
}

/// Body of `GET /api/{lost|found}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ItemsResponse {
    pub items: Vec<Item>,
}

/// Wrapper for a successful item submission.
#[derive(Debug, Serialize, Deserialize)]
pub struct ItemResponse {
    pub success: bool,
    pub item: Item,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

/// Query parameters accepted by the listing endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub sort: String,
}
