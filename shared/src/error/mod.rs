//! Error codes and the API envelope
//!
//! - [`ErrorCode`]: numeric codes shared with the reservation API
//! - [`AppError`]: code, message and optional details
//! - [`ApiResponse`]: the `{code, message, data, details}` body the API returns
//!
//! Codes are grouped by range: 0xxx general, 4xxx reservation, 9xxx system.
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::required("people");
//! assert_eq!(err.code, ErrorCode::RequiredField);
//! assert_eq!(err.message, "people is required");
//!
//! let err = AppError::new(ErrorCode::InvalidTime).with_detail("value", "23:45");
//! assert_eq!(err.code.code(), 4102);
//! ```

mod codes;
mod http;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
