//! Reservation date/time validator
//!
//! Decides whether a requested date and time can be booked and snaps the
//! time forward to the next slot. Pure and reentrant: the form calls it on
//! every change event.
//!
//! Rules are checked in order and the first failure is reported:
//! 1. both inputs parse (`MalformedInput`)
//! 2. the date is open and not before today (`InvalidDate`)
//! 3. the rounded time lies in the operating window (`InvalidTime`)
//! 4. on the current day, the rounded time is still ahead of the clock (`InvalidTime`)

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::Serialize;
use thiserror::Error;

use super::policy::BookingPolicy;
use crate::error::{AppError, ErrorCode};
use crate::util;

/// Why a date was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DateRejection {
    #[error("closed on {0}")]
    ClosedDay(Weekday),
    #[error("{date} is before today ({today})")]
    InPast { date: NaiveDate, today: NaiveDate },
}

/// Why a time was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimeRejection {
    /// `requested` is the time as entered; the rounded slot may not exist
    /// (rounding past midnight).
    #[error("{requested} is outside the operating window {opening}-{last_seating}")]
    OutsideWindow {
        requested: NaiveTime,
        opening: NaiveTime,
        last_seating: NaiveTime,
    },
    #[error("{slot} has already passed (now {now})")]
    AlreadyPassed { slot: NaiveTime, now: NaiveTime },
}

/// Validation failure, recoverable by correcting the input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("invalid date: {0}")]
    InvalidDate(DateRejection),
    #[error("invalid time: {0}")]
    InvalidTime(TimeRejection),
    #[error("malformed {field}: {value:?}")]
    MalformedInput { field: &'static str, value: String },
}

impl ScheduleError {
    fn malformed(field: &'static str, value: &str) -> Self {
        Self::MalformedInput {
            field,
            value: value.to_string(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidDate(_) => ErrorCode::InvalidDate,
            Self::InvalidTime(_) => ErrorCode::InvalidTime,
            Self::MalformedInput { .. } => ErrorCode::MalformedInput,
        }
    }

    /// Message shown inline under the offending form field
    pub fn user_message(&self) -> &'static str {
        self.code().message()
    }
}

impl From<ScheduleError> for AppError {
    fn from(err: ScheduleError) -> Self {
        let reason = err.to_string();
        AppError::new(err.code()).with_detail("reason", reason)
    }
}

/// Outcome of a validation, ready to be rendered or serialized
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    #[serde(with = "util::hhmm::option")]
    pub normalized_time: Option<NaiveTime>,
    pub reason: Option<String>,
    pub code: Option<ErrorCode>,
}

impl From<Result<NaiveTime, ScheduleError>> for ValidationResult {
    fn from(result: Result<NaiveTime, ScheduleError>) -> Self {
        match result {
            Ok(slot) => Self {
                is_valid: true,
                normalized_time: Some(slot),
                reason: None,
                code: None,
            },
            Err(err) => Self {
                is_valid: false,
                normalized_time: None,
                reason: Some(err.to_string()),
                code: Some(err.code()),
            },
        }
    }
}

/// Applies a [`BookingPolicy`] to requested dates and times
#[derive(Debug, Clone, Default)]
pub struct ReservationTimeValidator {
    policy: BookingPolicy,
}

impl ReservationTimeValidator {
    pub fn new(policy: BookingPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &BookingPolicy {
        &self.policy
    }

    /// Validate raw form input against the policy at instant `now`
    pub fn validate(&self, date: &str, time: &str, now: NaiveDateTime) -> ValidationResult {
        self.validate_raw(date, time, now).into()
    }

    fn validate_raw(
        &self,
        date: &str,
        time: &str,
        now: NaiveDateTime,
    ) -> Result<NaiveTime, ScheduleError> {
        let parsed_date =
            util::parse_date(date).map_err(|_| ScheduleError::malformed("date", date))?;
        let parsed_time =
            util::parse_time(time).map_err(|_| ScheduleError::malformed("time", time))?;
        self.check(parsed_date, parsed_time, now)
    }

    /// Typed validation; returns the normalized slot
    pub fn check(
        &self,
        date: NaiveDate,
        time: NaiveTime,
        now: NaiveDateTime,
    ) -> Result<NaiveTime, ScheduleError> {
        self.check_date(date, now.date())?;
        self.check_time(time, Some(date), now)
    }

    /// Date rule: open weekday and not before `today`
    pub fn check_date(&self, date: NaiveDate, today: NaiveDate) -> Result<NaiveDate, ScheduleError> {
        if self.policy.is_closed_on(date) {
            let rejection = DateRejection::ClosedDay(chrono::Datelike::weekday(&date));
            tracing::debug!(%date, %rejection, "reservation date rejected");
            return Err(ScheduleError::InvalidDate(rejection));
        }
        if date < today {
            let rejection = DateRejection::InPast { date, today };
            tracing::debug!(%date, %rejection, "reservation date rejected");
            return Err(ScheduleError::InvalidDate(rejection));
        }
        Ok(date)
    }

    /// Round `time` up to the next slot and check it against the window
    pub fn normalize_time(&self, time: NaiveTime) -> Result<NaiveTime, ScheduleError> {
        let time = util::truncate_to_minute(time).unwrap_or(time);
        match self.policy.round_up(time) {
            Some(slot) if self.policy.is_within_window(slot) => Ok(slot),
            _ => {
                let rejection = TimeRejection::OutsideWindow {
                    requested: time,
                    opening: self.policy.opening(),
                    last_seating: self.policy.last_seating(),
                };
                tracing::debug!(%time, %rejection, "reservation time rejected");
                Err(ScheduleError::InvalidTime(rejection))
            }
        }
    }

    /// Time rule, plus the clock check when `date` is the current day
    ///
    /// With no date chosen yet only the window is enforced.
    pub fn check_time(
        &self,
        time: NaiveTime,
        date: Option<NaiveDate>,
        now: NaiveDateTime,
    ) -> Result<NaiveTime, ScheduleError> {
        let slot = self.normalize_time(time)?;

        if date == Some(now.date()) {
            let clock = util::truncate_to_minute(now.time()).unwrap_or(now.time());
            if slot <= clock {
                let rejection = TimeRejection::AlreadyPassed { slot, now: clock };
                tracing::debug!(%slot, %rejection, "reservation time rejected");
                return Err(ScheduleError::InvalidTime(rejection));
            }
        }
        Ok(slot)
    }
}

/// Validate with the default policy (10:30–21:30, half-hour slots, closed Tuesdays)
pub fn validate(date: &str, time: &str, now: NaiveDateTime) -> ValidationResult {
    ReservationTimeValidator::default().validate(date, time, now)
}
