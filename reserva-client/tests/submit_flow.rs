// reserva-client/tests/submit_flow.rs
// Form submission and search refresh against an in-memory API

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use reserva_client::{
    ClientError, ClientResult, Reservation, ReservationApi, ReservationCreate, refresh_search, submit,
};
use shared::form::{FormAction, ReservationForm, SearchAction, SearchState, TextField};
use shared::{ErrorCode, ReservationTimeValidator, Route};

#[derive(Default)]
struct FakeApi {
    calls: Mutex<Vec<String>>,
    fail_search: bool,
}

fn saved(id: i64, draft: &ReservationCreate) -> Reservation {
    Reservation {
        reservation_id: id,
        first_name: draft.first_name.clone(),
        last_name: draft.last_name.clone(),
        mobile_number: draft.mobile_number.clone(),
        reservation_date: draft.reservation_date,
        reservation_time: draft.reservation_time,
        people: draft.people,
        status: Default::default(),
        created_at: None,
        updated_at: None,
    }
}

#[async_trait]
impl ReservationApi for FakeApi {
    async fn create_reservation(&self, draft: &ReservationCreate) -> ClientResult<Reservation> {
        self.calls.lock().unwrap().push("create".into());
        Ok(saved(1, draft))
    }

    async fn edit_reservation(
        &self,
        draft: &ReservationCreate,
        reservation_id: i64,
    ) -> ClientResult<Reservation> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("edit {}", reservation_id));
        Ok(saved(reservation_id, draft))
    }

    async fn search_by_number(&self, mobile_number: &str) -> ClientResult<Vec<Reservation>> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("search {}", mobile_number));
        if self.fail_search {
            return Err(ClientError::Api {
                code: ErrorCode::InternalError,
                status: 500,
                message: "database offline".into(),
            });
        }
        Ok(Vec::new())
    }
}

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 10)
        .unwrap()
        .and_hms_opt(14, 0, 0)
        .unwrap()
}

fn filled_form(base: ReservationForm, date: &str, time: &str) -> ReservationForm {
    let validator = ReservationTimeValidator::default();
    let text = |field, value: &str| FormAction::FieldChanged {
        field,
        value: value.to_string(),
    };
    [
        text(TextField::FirstName, "Ada"),
        text(TextField::LastName, "Lovelace"),
        text(TextField::MobileNumber, "555-1234"),
        text(TextField::People, "3"),
        FormAction::DateChanged(date.to_string()),
        FormAction::TimeChanged(time.to_string()),
    ]
    .into_iter()
    .fold(base, |form, action| form.reduce(action, &validator, now()))
}

#[tokio::test]
async fn test_submit_new_reservation_navigates_to_dashboard() {
    let api = FakeApi::default();
    let form = filled_form(ReservationForm::new(), "2024-06-12", "19:05");

    let (reservation, route) = submit(&api, &form).await.unwrap();

    assert_eq!(reservation.reservation_time, NaiveTime::from_hms_opt(19, 30, 0).unwrap());
    assert_eq!(route.path(), "/dashboard?date=2024-06-12");
    assert_eq!(*api.calls.lock().unwrap(), vec!["create".to_string()]);
}

#[tokio::test]
async fn test_submit_edit_uses_reservation_id() {
    let api = FakeApi::default();
    let existing = saved(
        42,
        &ReservationCreate {
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            mobile_number: "555-0000".into(),
            reservation_date: NaiveDate::from_ymd_opt(2024, 6, 14).unwrap(),
            reservation_time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            people: 2,
        },
    );
    let form = filled_form(ReservationForm::edit(&existing).unwrap(), "2024-06-13", "20:00");

    let (reservation, route) = submit(&api, &form).await.unwrap();

    assert_eq!(reservation.reservation_id, 42);
    assert_eq!(
        route,
        Route::Dashboard {
            date: NaiveDate::from_ymd_opt(2024, 6, 13)
        }
    );
    assert_eq!(*api.calls.lock().unwrap(), vec!["edit 42".to_string()]);
}

#[tokio::test]
async fn test_invalid_form_is_not_sent() {
    let api = FakeApi::default();
    // Tuesday
    let form = filled_form(ReservationForm::new(), "2024-06-11", "19:00");

    let err = submit(&api, &form).await.unwrap_err();

    assert!(matches!(err, ClientError::Rejected(_)));
    assert_eq!(err.code(), ErrorCode::InvalidDate);
    assert!(api.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_refresh_search_skips_blank_query() {
    let api = FakeApi::default();
    let state = refresh_search(&api, SearchState::default()).await;

    assert!(state.is_empty_search());
    assert!(api.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_refresh_search_reports_no_results() {
    let api = FakeApi::default();
    let state = SearchState::default().reduce(SearchAction::QueryChanged("555".into()));

    let state = refresh_search(&api, state).await;

    assert!(state.is_no_results());
    assert_eq!(*api.calls.lock().unwrap(), vec!["search 555".to_string()]);
}

#[tokio::test]
async fn test_refresh_search_surfaces_error_message() {
    let api = FakeApi {
        fail_search: true,
        ..Default::default()
    };
    let state = SearchState::default().reduce(SearchAction::QueryChanged("555".into()));

    let state = refresh_search(&api, state).await;

    assert_eq!(state.error(), Some("database offline"));
    assert!(!state.is_no_results());
}
