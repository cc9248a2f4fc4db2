//! Storage backend settings.

pub mod service;

pub use service::SettingsService;
