//! # skyvault-entity
//!
//! Domain entity models for SkyVault. Every struct in this crate
//! represents a database row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod file;
pub mod folder;
pub mod settings;
pub mod user;
