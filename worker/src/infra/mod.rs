pub mod axum;
pub mod error;
pub mod provider;
