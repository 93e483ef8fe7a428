//! View state for the reservation form and the search page

pub mod reservation;
pub mod search;

pub use reservation::{FormAction, FormMode, ReservationForm, TextField};
pub use search::{SEARCH_PLACEHOLDER, SearchAction, SearchState};
