//! Per-user storage accounting.

pub mod accountant;

pub use accountant::QuotaAccountant;
