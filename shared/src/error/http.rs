//! Mapping of API response statuses onto error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Closest error code for a failed API response without a usable body
    pub fn from_http_status(status: StatusCode) -> Self {
        match status {
            StatusCode::NOT_FOUND => Self::NotFound,
            StatusCode::CONFLICT => Self::ReservationNotEditable,
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => Self::ValidationFailed,
            StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => Self::TimeoutError,
            StatusCode::SERVICE_UNAVAILABLE | StatusCode::BAD_GATEWAY => Self::NetworkError,
            _ => Self::InternalError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_http_status() {
        assert_eq!(
            ErrorCode::from_http_status(StatusCode::NOT_FOUND),
            ErrorCode::NotFound
        );
        assert_eq!(
            ErrorCode::from_http_status(StatusCode::CONFLICT),
            ErrorCode::ReservationNotEditable
        );
        assert_eq!(
            ErrorCode::from_http_status(StatusCode::UNPROCESSABLE_ENTITY),
            ErrorCode::ValidationFailed
        );
        assert_eq!(
            ErrorCode::from_http_status(StatusCode::GATEWAY_TIMEOUT),
            ErrorCode::TimeoutError
        );
        assert_eq!(
            ErrorCode::from_http_status(StatusCode::IM_A_TEAPOT),
            ErrorCode::InternalError
        );
    }
}
