//! REST service layer for the ExpertLink admin front-end.

pub mod api_client;
pub mod auth;
pub mod config;
pub mod token;

pub use api_client::ApiClient;
pub use token::{MemoryTokenStore, TokenStore};
