//! Shared types for the kiosk ordering core
//!
//! Domain models and the error taxonomy used across crates: catalog
//! products, category selection rules, app settings and order records.

pub mod error;
pub mod models;

// Re-exports
pub use error::{KioskError, KioskResult};
pub use serde::{Deserialize, Serialize};
