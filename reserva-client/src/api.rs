//! Reservation API boundary

use async_trait::async_trait;
use shared::models::{Reservation, ReservationCreate};

use crate::{ClientResult, HttpClient};

/// Operations the reservation views need from the backend
#[async_trait]
pub trait ReservationApi: Send + Sync {
    /// `POST /reservations`
    async fn create_reservation(&self, draft: &ReservationCreate) -> ClientResult<Reservation>;

    /// `PUT /reservations/{id}`
    async fn edit_reservation(
        &self,
        draft: &ReservationCreate,
        reservation_id: i64,
    ) -> ClientResult<Reservation>;

    /// `GET /reservations?mobile_number=...` (partial match on the server)
    async fn search_by_number(&self, mobile_number: &str) -> ClientResult<Vec<Reservation>>;
}

#[async_trait]
impl ReservationApi for HttpClient {
    async fn create_reservation(&self, draft: &ReservationCreate) -> ClientResult<Reservation> {
        let created: Reservation = self.post("reservations", draft).await?;
        tracing::info!(
            reservation_id = created.reservation_id,
            date = %created.reservation_date,
            "Reservation created"
        );
        Ok(created)
    }

    async fn edit_reservation(
        &self,
        draft: &ReservationCreate,
        reservation_id: i64,
    ) -> ClientResult<Reservation> {
        let path = format!("reservations/{}", reservation_id);
        let updated: Reservation = self.put(&path, draft).await?;
        tracing::info!(reservation_id, "Reservation updated");
        Ok(updated)
    }

    async fn search_by_number(&self, mobile_number: &str) -> ClientResult<Vec<Reservation>> {
        self.get("reservations", &[("mobile_number", mobile_number.trim())])
            .await
    }
}
