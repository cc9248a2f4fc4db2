//! File upload, listing, and trash lifecycle.

pub mod service;

pub use service::{FileService, TrashContents};
