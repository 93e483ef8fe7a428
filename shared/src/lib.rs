//! Shared types for the reservation toolkit
//!
//! Domain models, error types, the booking rules and validator, form and
//! search view state, and the client-side route table.

pub mod booking;
pub mod error;
pub mod form;
pub mod models;
pub mod routes;
pub mod util;
pub mod validation;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use booking::{BookingPolicy, ReservationTimeValidator, ScheduleError, ValidationResult};
pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use routes::{Resolved, Route};
