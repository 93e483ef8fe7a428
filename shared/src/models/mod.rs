//! Data models
//!
//! Shared between the API client and the form/search state.
//! All IDs are `i64`.

pub mod reservation;

// Re-exports
pub use reservation::*;
