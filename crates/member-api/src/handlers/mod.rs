//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod attendance;
pub mod health;
pub mod members;
pub mod plans;
pub mod subscriptions;

use crate::response::ApiError;

/// Parse a path segment as a store-assigned id
pub(crate) fn parse_id(raw: &str, what: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::invalid_path(format!("Invalid {what} format")))
}
