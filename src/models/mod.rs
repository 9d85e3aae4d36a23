pub mod api;
pub mod item;
pub mod session;
pub mod user;
