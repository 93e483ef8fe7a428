//! Reserva Client - HTTP client for the reservation API
//!
//! Provides the [`ReservationApi`] boundary, its network implementation and
//! the submit/search flows driven by the form state in `shared`.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod submit;

pub use api::ReservationApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use submit::{refresh_search, submit};

// Re-export shared types for convenience
pub use shared::models::{Reservation, ReservationCreate};
