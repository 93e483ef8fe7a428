//! Client-side route table
//!
//! Maps a location (path plus optional query) to the view that renders it.

use chrono::NaiveDate;
use std::fmt;

/// A resolved view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Day overview, optionally for a specific date
    Dashboard { date: Option<NaiveDate> },
    NewReservation,
    EditReservation { reservation_id: i64 },
    SeatReservation { reservation_id: i64 },
    NewTable,
    Search,
    NotFound,
}

/// Result of resolving a location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved {
    /// Render this view
    View(Route),
    /// Replace the location with this route's path
    Redirect(Route),
}

impl Resolved {
    /// The view that ends up on screen
    pub fn route(self) -> Route {
        match self {
            Self::View(r) | Self::Redirect(r) => r,
        }
    }
}

impl Route {
    /// Resolve a location such as `/dashboard?date=2024-06-10`
    ///
    /// `/`, `/reservations` and `/reservations/new` match exactly; the other
    /// views also match any deeper path below them.
    pub fn resolve(location: &str) -> Resolved {
        let (path, query) = location.split_once('?').unwrap_or((location, ""));
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] | ["reservations"] => Resolved::Redirect(Route::Dashboard { date: None }),
            ["dashboard", ..] => Resolved::View(Route::Dashboard {
                date: query_param(query, "date").and_then(|d| crate::util::parse_date(d).ok()),
            }),
            ["reservations", "new"] => Resolved::View(Route::NewReservation),
            ["reservations", id, "edit", ..] => match id.parse() {
                Ok(reservation_id) => Resolved::View(Route::EditReservation { reservation_id }),
                Err(_) => Resolved::View(Route::NotFound),
            },
            ["reservations", id, "seat", ..] => match id.parse() {
                Ok(reservation_id) => Resolved::View(Route::SeatReservation { reservation_id }),
                Err(_) => Resolved::View(Route::NotFound),
            },
            ["tables", "new", ..] => Resolved::View(Route::NewTable),
            ["search", ..] => Resolved::View(Route::Search),
            _ => Resolved::View(Route::NotFound),
        }
    }

    /// Canonical location of this route
    pub fn path(&self) -> String {
        match self {
            Route::Dashboard { date: None } => "/dashboard".to_string(),
            Route::Dashboard { date: Some(d) } => format!("/dashboard?date={}", d.format("%Y-%m-%d")),
            Route::NewReservation => "/reservations/new".to_string(),
            Route::EditReservation { reservation_id } => {
                format!("/reservations/{}/edit", reservation_id)
            }
            Route::SeatReservation { reservation_id } => {
                format!("/reservations/{}/seat", reservation_id)
            }
            Route::NewTable => "/tables/new".to_string(),
            Route::Search => "/search".to_string(),
            Route::NotFound => "/not-found".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

fn query_param<'a>(query: &'a str, key: &str) -> Option<&'a str> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v)
}
