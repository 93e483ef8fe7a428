//! Booking policy — the restaurant's reservation rules as data
//!
//! | Environment variable   | Default | Description |
//! |------------------------|---------|-------------|
//! | RESERVA_TIMEZONE       | UTC     | Business timezone (IANA name) |
//! | RESERVA_OPENING        | 10:30   | First bookable slot |
//! | RESERVA_LAST_SEATING   | 21:30   | Last bookable slot |
//! | RESERVA_SLOT_MINUTES   | 30      | Slot length, must divide 60 |
//! | RESERVA_CLOSED_DAYS    | tue     | Comma separated weekdays |

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};
use chrono_tz::Tz;

use crate::error::{AppError, AppResult};
use crate::util;

/// Opening hours, slot length and closed days of the restaurant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingPolicy {
    opening: NaiveTime,
    last_seating: NaiveTime,
    slot_minutes: u32,
    closed_days: Vec<Weekday>,
    timezone: Tz,
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self {
            opening: hm(10, 30),
            last_seating: hm(21, 30),
            slot_minutes: 30,
            closed_days: vec![Weekday::Tue],
            timezone: Tz::UTC,
        }
    }
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

impl BookingPolicy {
    /// Build a policy, checking that the window is well formed
    ///
    /// `slot_minutes` must divide 60 and both window bounds must sit on a
    /// slot boundary.
    pub fn new(
        opening: NaiveTime,
        last_seating: NaiveTime,
        slot_minutes: u32,
        closed_days: Vec<Weekday>,
        timezone: Tz,
    ) -> AppResult<Self> {
        if slot_minutes == 0 || 60 % slot_minutes != 0 {
            return Err(AppError::config(format!(
                "slot length must divide 60 minutes, got {}",
                slot_minutes
            )));
        }
        if opening > last_seating {
            return Err(AppError::config(format!(
                "opening {} is after last seating {}",
                util::format_time(opening),
                util::format_time(last_seating)
            )));
        }

        let policy = Self {
            opening,
            last_seating,
            slot_minutes,
            closed_days,
            timezone,
        };
        for bound in [opening, last_seating] {
            if !policy.is_on_slot(bound) {
                return Err(AppError::config(format!(
                    "{} is not on a {}-minute boundary",
                    util::format_time(bound),
                    slot_minutes
                )));
            }
        }
        Ok(policy)
    }

    /// Load the policy from `RESERVA_*` environment variables
    ///
    /// Unset variables fall back to the defaults; set but unparsable values
    /// are an error.
    pub fn from_env() -> AppResult<Self> {
        let defaults = Self::default();

        let timezone = match env_var("RESERVA_TIMEZONE") {
            Some(v) => v.parse::<Tz>().map_err(|e| {
                AppError::config(format!("Invalid RESERVA_TIMEZONE '{}': {}", v, e))
            })?,
            None => defaults.timezone,
        };
        let opening = match env_var("RESERVA_OPENING") {
            Some(v) => util::parse_time(&v)
                .map_err(|_| AppError::config(format!("Invalid RESERVA_OPENING '{}'", v)))?,
            None => defaults.opening,
        };
        let last_seating = match env_var("RESERVA_LAST_SEATING") {
            Some(v) => util::parse_time(&v)
                .map_err(|_| AppError::config(format!("Invalid RESERVA_LAST_SEATING '{}'", v)))?,
            None => defaults.last_seating,
        };
        let slot_minutes = match env_var("RESERVA_SLOT_MINUTES") {
            Some(v) => v
                .parse()
                .map_err(|_| AppError::config(format!("Invalid RESERVA_SLOT_MINUTES '{}'", v)))?,
            None => defaults.slot_minutes,
        };
        let closed_days = match env_var("RESERVA_CLOSED_DAYS") {
            Some(v) => parse_weekdays(&v)?,
            None => defaults.closed_days,
        };

        Self::new(opening, last_seating, slot_minutes, closed_days, timezone)
    }

    /// Replace the business timezone
    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    /// Replace the closed weekdays
    pub fn with_closed_days(mut self, closed_days: Vec<Weekday>) -> Self {
        self.closed_days = closed_days;
        self
    }

    pub fn opening(&self) -> NaiveTime {
        self.opening
    }

    pub fn last_seating(&self) -> NaiveTime {
        self.last_seating
    }

    pub fn slot_minutes(&self) -> u32 {
        self.slot_minutes
    }

    pub fn closed_days(&self) -> &[Weekday] {
        &self.closed_days
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Whether the restaurant is closed on this date's weekday
    pub fn is_closed_on(&self, date: NaiveDate) -> bool {
        self.closed_days.contains(&date.weekday())
    }

    /// Whether `time` lies in the inclusive operating window
    pub fn is_within_window(&self, time: NaiveTime) -> bool {
        time >= self.opening && time <= self.last_seating
    }

    /// Whether `time` sits exactly on a slot boundary
    pub fn is_on_slot(&self, time: NaiveTime) -> bool {
        time.second() == 0 && time.nanosecond() == 0 && time.minute() % self.slot_minutes == 0
    }

    /// Round `time` up to the next slot boundary
    ///
    /// Times already on a boundary are returned unchanged. Returns `None`
    /// when rounding crosses midnight.
    pub fn round_up(&self, time: NaiveTime) -> Option<NaiveTime> {
        let minutes = time.hour() * 60 + time.minute();
        let rounded = minutes.div_ceil(self.slot_minutes) * self.slot_minutes;
        NaiveTime::from_hms_opt(rounded / 60, rounded % 60, 0)
    }

    /// Every bookable slot of a day, in order
    pub fn slots(&self) -> impl Iterator<Item = NaiveTime> + '_ {
        let step = chrono::Duration::minutes(i64::from(self.slot_minutes));
        std::iter::successors(Some(self.opening), move |t| {
            let (next, wrapped) = t.overflowing_add_signed(step);
            (wrapped == 0 && next > *t).then_some(next)
        })
        .take_while(move |t| *t <= self.last_seating)
    }

    /// Current wall-clock time in the business timezone
    pub fn now(&self) -> NaiveDateTime {
        util::now_in(self.timezone)
    }
}

/// Parse a comma separated weekday list (`"tue"`, `"Tuesday, sun"`)
pub fn parse_weekdays(input: &str) -> AppResult<Vec<Weekday>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<Weekday>()
                .map_err(|_| AppError::config(format!("Invalid weekday '{}'", s)))
        })
        .collect()
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
