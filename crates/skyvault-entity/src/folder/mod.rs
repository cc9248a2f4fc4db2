//! Folder entity.

pub mod model;

pub use model::{Folder, NewFolder};
