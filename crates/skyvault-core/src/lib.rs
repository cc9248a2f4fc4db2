//! # skyvault-core
//!
//! Core crate for SkyVault. Contains configuration schemas, the unified
//! error system, and the shared result alias.
//!
//! This crate has **no** internal dependencies on other SkyVault crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
