#![forbid(unsafe_code)]

pub mod error;

pub mod domain;
pub mod persist;
pub mod store;

// Re-exports: stable API surface
pub use domain::{DiskStatus, RecordRow};
pub use persist::{load, save};
pub use store::Cardbox;
