//! Create/edit reservation form state
//!
//! The form is an immutable value: every input event is turned into a
//! [`FormAction`] and [`ReservationForm::reduce`] returns the next state.
//! Date and time inputs go through the [`ReservationTimeValidator`] on each
//! change; an invalid value clears the field and records the error shown
//! under it.

use chrono::NaiveDateTime;

use crate::booking::{ReservationTimeValidator, ScheduleError, TimeRejection};
use crate::error::{AppError, AppResult, ErrorCode};
use crate::models::{Reservation, ReservationCreate, ReservationDraft};
use crate::routes::Route;
use crate::util;
use crate::validation::{self, MAX_NAME_LEN, MAX_PHONE_LEN};

/// Whether the form creates a reservation or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    New,
    Edit { reservation_id: i64 },
}

/// Free-text inputs of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    FirstName,
    LastName,
    MobileNumber,
    People,
}

/// One input event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    FieldChanged { field: TextField, value: String },
    DateChanged(String),
    TimeChanged(String),
    Reset,
}

/// Form state: the draft plus the pending field errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationForm {
    mode: FormMode,
    initial: ReservationDraft,
    draft: ReservationDraft,
    date_error: Option<ScheduleError>,
    time_error: Option<ScheduleError>,
}

impl Default for ReservationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ReservationForm {
    /// Empty form for a new reservation
    pub fn new() -> Self {
        Self {
            mode: FormMode::New,
            initial: ReservationDraft::default(),
            draft: ReservationDraft::default(),
            date_error: None,
            time_error: None,
        }
    }

    /// Form seeded from an existing reservation
    ///
    /// Seated, finished and cancelled reservations cannot be edited.
    pub fn edit(reservation: &Reservation) -> AppResult<Self> {
        if !reservation.is_editable() {
            return Err(AppError::new(ErrorCode::ReservationNotEditable)
                .with_detail("reservation_id", reservation.reservation_id)
                .with_detail("status", format!("{:?}", reservation.status).to_lowercase()));
        }
        let draft = ReservationDraft::from(reservation);
        Ok(Self {
            mode: FormMode::Edit {
                reservation_id: reservation.reservation_id,
            },
            initial: draft.clone(),
            draft,
            date_error: None,
            time_error: None,
        })
    }

    /// Blank form that saves over reservation `reservation_id`
    pub fn editing(reservation_id: i64) -> Self {
        Self {
            mode: FormMode::Edit { reservation_id },
            ..Self::new()
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn draft(&self) -> &ReservationDraft {
        &self.draft
    }

    pub fn date_error(&self) -> Option<&ScheduleError> {
        self.date_error.as_ref()
    }

    pub fn time_error(&self) -> Option<&ScheduleError> {
        self.time_error.as_ref()
    }

    pub fn is_date_valid(&self) -> bool {
        self.date_error.is_none()
    }

    pub fn is_time_valid(&self) -> bool {
        self.time_error.is_none()
    }

    /// Apply one input event
    pub fn reduce(
        mut self,
        action: FormAction,
        validator: &ReservationTimeValidator,
        now: NaiveDateTime,
    ) -> Self {
        match action {
            FormAction::FieldChanged { field, value } => {
                let slot = match field {
                    TextField::FirstName => &mut self.draft.first_name,
                    TextField::LastName => &mut self.draft.last_name,
                    TextField::MobileNumber => &mut self.draft.mobile_number,
                    TextField::People => &mut self.draft.people,
                };
                *slot = value;
            }
            FormAction::DateChanged(raw) => self.apply_date(&raw, validator, now),
            FormAction::TimeChanged(raw) => self.apply_time(&raw, validator, now),
            FormAction::Reset => {
                self.draft = self.initial.clone();
                self.date_error = None;
                self.time_error = None;
            }
        }
        self
    }

    fn apply_date(&mut self, raw: &str, validator: &ReservationTimeValidator, now: NaiveDateTime) {
        if raw.trim().is_empty() {
            self.draft.reservation_date = None;
            self.date_error = None;
            return;
        }

        let checked = util::parse_date(raw)
            .map_err(|_| ScheduleError::MalformedInput {
                field: "date",
                value: raw.to_string(),
            })
            .and_then(|date| validator.check_date(date, now.date()));

        match checked {
            Ok(date) => {
                self.draft.reservation_date = Some(date);
                self.date_error = None;
                // The same-day clock rule depends on the date
                if let Some(time) = self.draft.reservation_time
                    && let Err(err) = validator.check_time(time, Some(date), now)
                {
                    self.draft.reservation_time = None;
                    self.time_error = Some(err);
                }
                if date != now.date()
                    && matches!(
                        self.time_error,
                        Some(ScheduleError::InvalidTime(TimeRejection::AlreadyPassed { .. }))
                    )
                {
                    self.time_error = None;
                }
            }
            Err(err) => {
                self.draft.reservation_date = None;
                self.date_error = Some(err);
            }
        }
    }

    fn apply_time(&mut self, raw: &str, validator: &ReservationTimeValidator, now: NaiveDateTime) {
        if raw.trim().is_empty() {
            self.draft.reservation_time = None;
            self.time_error = None;
            return;
        }

        let checked = util::parse_time(raw)
            .map_err(|_| ScheduleError::MalformedInput {
                field: "time",
                value: raw.to_string(),
            })
            .and_then(|time| validator.check_time(time, self.draft.reservation_date, now));

        match checked {
            Ok(slot) => {
                self.draft.reservation_time = Some(slot);
                self.time_error = None;
            }
            Err(err) => {
                self.draft.reservation_time = None;
                self.time_error = Some(err);
            }
        }
    }

    /// Build the API payload, refusing incomplete or invalid drafts
    pub fn to_payload(&self) -> AppResult<ReservationCreate> {
        let draft = &self.draft;
        validation::validate_required_text(&draft.first_name, "first_name", MAX_NAME_LEN)?;
        validation::validate_required_text(&draft.last_name, "last_name", MAX_NAME_LEN)?;
        validation::validate_required_text(&draft.mobile_number, "mobile_number", MAX_PHONE_LEN)?;
        let people = validation::parse_party_size(&draft.people)?;

        if let Some(err) = self.date_error.clone().or_else(|| self.time_error.clone()) {
            return Err(err.into());
        }
        let reservation_date = draft
            .reservation_date
            .ok_or_else(|| AppError::required("reservation_date"))?;
        let reservation_time = draft
            .reservation_time
            .ok_or_else(|| AppError::required("reservation_time"))?;

        Ok(ReservationCreate {
            first_name: draft.first_name.trim().to_string(),
            last_name: draft.last_name.trim().to_string(),
            mobile_number: draft.mobile_number.trim().to_string(),
            reservation_date,
            reservation_time,
            people,
        })
    }

    /// Where to navigate after submit or cancel
    pub fn dashboard_route(&self) -> Route {
        Route::Dashboard {
            date: self.draft.reservation_date,
        }
    }
}
