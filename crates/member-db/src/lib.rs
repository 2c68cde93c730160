//! # member-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `member-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Composable filter builders for the search/list queries
//! - Repository implementations, with the compound lifecycle operations
//!   (subscription create, cancel, check-in) each running as one transaction
//!
//! ## Usage
//!
//! ```rust,ignore
//! use member_db::pool::{create_pool, DatabaseConfig};
//! use member_db::PgMemberRepository;
//! use member_core::traits::MemberRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let member_repo = PgMemberRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod filter;
pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgAttendanceRepository, PgMemberRepository, PgPlanRepository, PgSubscriptionRepository,
};
