pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod notify;
pub mod stats;
pub mod validate;
