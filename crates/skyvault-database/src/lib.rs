//! # skyvault-database
//!
//! SQLite connection management and concrete repository implementations
//! for all SkyVault entities. Each repository wraps exactly one record
//! collection; every method executes a single statement, so transaction
//! scope is one collection operation and there is no cross-collection
//! atomicity.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
