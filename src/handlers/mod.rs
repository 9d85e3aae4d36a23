pub mod auth;
pub mod bearer;
pub mod fallback;
pub mod health;
pub mod items;
