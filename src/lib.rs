pub mod core;
pub mod models;
pub mod stores;
pub mod session;
pub mod backend;
pub mod auth;
pub mod report;
pub mod listing;
pub mod validation;
pub mod utils;
pub mod handlers;
