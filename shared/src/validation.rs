//! Input validation helpers
//!
//! Text length limits for the reservation form fields.

use crate::error::{AppError, AppResult, ErrorCode};

// ── Text length limits ──────────────────────────────────────────────

/// First and last names
pub const MAX_NAME_LEN: usize = 200;

/// Phone numbers
pub const MAX_PHONE_LEN: usize = 32;

/// Largest party a single reservation may hold
pub const MAX_PARTY_SIZE: u32 = 100;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::required(field));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Parse the party size text field into a positive count.
pub fn parse_party_size(value: &str) -> AppResult<u32> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::required("people"));
    }
    match trimmed.parse::<u32>() {
        Ok(n) if (1..=MAX_PARTY_SIZE).contains(&n) => Ok(n),
        _ => Err(AppError::with_message(
            ErrorCode::InvalidPartySize,
            format!("Party size must be between 1 and {MAX_PARTY_SIZE}, got {trimmed:?}"),
        )
        .with_detail("field", "people")),
    }
}
