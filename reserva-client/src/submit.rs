//! Form submission and search refresh
//!
//! Glue between the view state in `shared::form` and a [`ReservationApi`].

use shared::form::{FormMode, ReservationForm, SearchAction, SearchState};
use shared::models::Reservation;
use shared::routes::Route;

use crate::{ClientResult, ReservationApi};

/// Validate the form, save it, and return where to navigate next
///
/// Nothing is sent when the form still has a pending date/time error or a
/// missing field; the [`ClientError::Rejected`](crate::ClientError::Rejected)
/// carries the reason.
pub async fn submit<A>(api: &A, form: &ReservationForm) -> ClientResult<(Reservation, Route)>
where
    A: ReservationApi + ?Sized,
{
    let payload = form.to_payload()?;

    let saved = match form.mode() {
        FormMode::New => api.create_reservation(&payload).await?,
        FormMode::Edit { reservation_id } => api.edit_reservation(&payload, reservation_id).await?,
    };

    let route = Route::Dashboard {
        date: Some(saved.reservation_date),
    };
    Ok((saved, route))
}

/// Run the search for the state's current query and fold in the outcome
pub async fn refresh_search<A>(api: &A, state: SearchState) -> SearchState
where
    A: ReservationApi + ?Sized,
{
    if !state.should_fetch() {
        return state;
    }
    let outcome = api.search_by_number(state.query()).await;
    match outcome {
        Ok(results) => state.reduce(SearchAction::ResultsLoaded(results)),
        Err(e) => {
            tracing::warn!(error = %e, query = state.query(), "Reservation search failed");
            let message = e.user_message();
            state.reduce(SearchAction::SearchFailed(message))
        }
    }
}
