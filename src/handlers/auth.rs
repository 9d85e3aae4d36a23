use crate::core::error::ServiceError;
use crate::core::state::AppState;
use crate::handlers::bearer::bearer_token;
use crate::models::api::{LoginRequest, SuccessResponse, TokenResponse, UserResponse};
use crate::models::user::NewUser;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::info;

/// Register a new user
///
/// POST /api/users/signup
pub async fn signup_handler(
    State(state): State<Arc<AppState>>,
    Json(form): Json<NewUser>,
) -> Result<Response, ServiceError> {
    let user = state.auth.signup(&form).await?;

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            success: true,
            user,
        }),
    )
        .into_response())
}

/// Log in and receive a bearer token
///
/// POST /api/users/login
pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    Json(form): Json<LoginRequest>,
) -> Result<Response, ServiceError> {
    let session = state.auth.login(&form.reg_no, &form.password).await?;

    Ok((
        StatusCode::OK,
        Json(TokenResponse {
            token: session.token,
            user: session.user,
        }),
    )
        .into_response())
}

/// Invalidate the presented token; best-effort on the backend side
///
/// POST /api/users/logout
pub async fn logout_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ServiceError> {
    let token = bearer_token(&headers)?;
    state.auth.logout(&token).await;

    Ok((
        StatusCode::OK,
        Json(SuccessResponse {
            success: true,
            message: "Logged out".to_string(),
        }),
    )
        .into_response())
}

/// The user behind the presented bearer token
///
/// GET /api/users/me
pub async fn me_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ServiceError> {
    let token = bearer_token(&headers)?;
    let user = state.auth.current_user(&token).await?;

    info!(reg_no = %user.reg_no, "Current user resolved");

    Ok((
        StatusCode::OK,
        Json(UserResponse {
            success: true,
            user,
        }),
    )
        .into_response())
}
