//! Reservation booking rules
//!
//! [`BookingPolicy`] holds the restaurant's hours and closed days;
//! [`ReservationTimeValidator`] applies them to requested dates and times.

pub mod policy;
pub mod validator;

pub use policy::{BookingPolicy, parse_weekdays};
pub use validator::{
    DateRejection, ReservationTimeValidator, ScheduleError, TimeRejection, ValidationResult,
    validate,
};
