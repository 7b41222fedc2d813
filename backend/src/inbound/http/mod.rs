//! HTTP inbound adapter exposing the lending endpoints and health probes.

pub mod error;
pub mod health;
pub mod library;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::{ApiError, ApiResult};
