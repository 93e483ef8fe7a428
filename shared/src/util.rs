//! Date/time helpers — input parsing and business timezone conversion
//!
//! Form inputs arrive as strings: dates from `<input type="date">`
//! (`YYYY-MM-DD`) or the legacy display format (`MM/DD/YYYY`), times from
//! `<input type="time">` (`HH:MM`, optionally with seconds).

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use chrono_tz::Tz;

use crate::error::{AppError, AppResult, ErrorCode};

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];
const TIME_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

/// Parse a date string (`YYYY-MM-DD` or `MM/DD/YYYY`)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    let trimmed = date.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::MalformedInput,
                format!("Invalid date format: {}", date),
            )
            .with_detail("field", "reservation_date")
        })
}

/// Parse a wall-clock time string (`HH:MM` or `HH:MM:SS`)
///
/// Seconds and sub-second precision are truncated.
pub fn parse_time(time: &str) -> AppResult<NaiveTime> {
    let trimmed = time.trim();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(trimmed, fmt).ok())
        .and_then(truncate_to_minute)
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::MalformedInput,
                format!("Invalid time format: {}", time),
            )
            .with_detail("field", "reservation_time")
        })
}

/// Drop seconds and nanoseconds
pub fn truncate_to_minute(time: NaiveTime) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0)
}

/// Format a time the way the time input expects it (`HH:MM`)
pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Current local wall-clock time in the business timezone
pub fn now_in(tz: Tz) -> NaiveDateTime {
    chrono::Utc::now().with_timezone(&tz).naive_local()
}

/// Serde adapter for `HH:MM` times (accepts `HH:MM:SS` on input)
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_time(*time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_time(&raw).map_err(serde::de::Error::custom)
    }

    /// Same as the parent module for `Option<NaiveTime>`
    pub mod option {
        use chrono::NaiveTime;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            time: &Option<NaiveTime>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match time {
                Some(t) => serializer.serialize_some(&crate::util::format_time(*t)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<NaiveTime>, D::Error> {
            Option::<String>::deserialize(deserializer)?
                .map(|raw| crate::util::parse_time(&raw).map_err(serde::de::Error::custom))
                .transpose()
        }
    }
}

/// Serde adapter for calendar dates
///
/// The API serializes dates as `YYYY-MM-DD` but some backends send a full
/// ISO timestamp (`2024-06-10T00:00:00.000Z`); only the date part is kept.
pub mod calendar_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format("%Y-%m-%d").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let date_part = raw.split('T').next().unwrap_or(&raw);
        super::parse_date(date_part).map_err(serde::de::Error::custom)
    }
}
