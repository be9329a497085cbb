//! HTTP inbound adapter exposing the REST endpoints.

pub mod error;
pub mod health;
pub mod score;
pub mod searches;
pub mod state;

pub use error::method_not_allowed;
pub use state::HttpState;
