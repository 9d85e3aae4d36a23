// HTTP routes configuration

use crate::core::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Item collections
        .route(
            "/api/{kind}",
            get(crate::handlers::items::list_handler).post(crate::handlers::items::report_handler),
        )

        // Accounts & sessions
        .route("/api/users/signup", post(crate::handlers::auth::signup_handler))
        .route("/api/users/login", post(crate::handlers::auth::login_handler))
        .route("/api/users/logout", post(crate::handlers::auth::logout_handler))
        .route("/api/users/me", get(crate::handlers::auth::me_handler))

        .route("/health", get(crate::handlers::health::health_handler))

        // 404 fallback for all unmatched routes
        .fallback(crate::handlers::fallback::fallback_handler)

        .with_state(state)
}
