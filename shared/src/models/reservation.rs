//! Reservation Model

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::util;

/// Reservation lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    #[default]
    Booked,
    Seated,
    Finished,
    Cancelled,
}

/// Reservation entity (预订)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reservation {
    pub reservation_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: String,
    #[serde(with = "util::calendar_date")]
    pub reservation_date: NaiveDate,
    #[serde(with = "util::hhmm")]
    pub reservation_time: NaiveTime,
    /// Party size
    pub people: u32,
    #[serde(default)]
    pub status: ReservationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Reservation {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Only booked reservations can still be edited
    pub fn is_editable(&self) -> bool {
        self.status == ReservationStatus::Booked
    }
}

/// Create / edit reservation payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReservationCreate {
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: String,
    #[serde(with = "util::calendar_date")]
    pub reservation_date: NaiveDate,
    #[serde(with = "util::hhmm")]
    pub reservation_time: NaiveTime,
    pub people: u32,
}

/// In-progress, unsaved reservation held by the form
///
/// Text fields hold exactly what was typed. Date and time are only set
/// once they pass validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationDraft {
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: String,
    /// Party size as typed
    pub people: String,
    pub reservation_date: Option<NaiveDate>,
    pub reservation_time: Option<NaiveTime>,
}

impl From<&Reservation> for ReservationDraft {
    fn from(r: &Reservation) -> Self {
        Self {
            first_name: r.first_name.clone(),
            last_name: r.last_name.clone(),
            mobile_number: r.mobile_number.clone(),
            people: r.people.to_string(),
            reservation_date: Some(r.reservation_date),
            reservation_time: Some(r.reservation_time),
        }
    }
}
