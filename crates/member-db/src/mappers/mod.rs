//! Model to entity mappers
//!
//! Conversions from database rows to domain entities. Status columns are
//! stored as text, so every conversion is a `TryFrom` — a row that fails to
//! parse indicates a store whose CHECK constraints were bypassed, surfaced
//! as a database error rather than a panic.

mod attendance;
mod member;
mod plan;
mod subscription;

use member_core::error::DomainError;
use member_core::value_objects::StatusParseError;

/// Shared conversion for a malformed stored status
pub(crate) fn corrupt_status(err: StatusParseError) -> DomainError {
    DomainError::Database(format!("corrupt stored status: {err}"))
}
