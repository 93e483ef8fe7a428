// reserva-client/tests/api_integration.rs
// HTTP client against a mock reservation API

use chrono::{NaiveDate, NaiveTime};
use reserva_client::{ClientConfig, ClientError, HttpClient, ReservationApi, ReservationCreate};
use serde_json::json;
use shared::ErrorCode;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn payload() -> ReservationCreate {
    ReservationCreate {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        mobile_number: "555-1234".into(),
        reservation_date: NaiveDate::from_ymd_opt(2024, 6, 12).unwrap(),
        reservation_time: NaiveTime::from_hms_opt(18, 30, 0).unwrap(),
        people: 4,
    }
}

fn reservation_json(id: i64) -> serde_json::Value {
    json!({
        "reservation_id": id,
        "first_name": "Ada",
        "last_name": "Lovelace",
        "mobile_number": "555-1234",
        "reservation_date": "2024-06-12",
        "reservation_time": "18:30:00",
        "people": 4,
        "status": "booked"
    })
}

async fn client_for(server: &MockServer) -> HttpClient {
    ClientConfig::new(server.uri())
        .with_timeout(5)
        .build_http_client()
        .unwrap()
}

#[tokio::test]
async fn test_create_reservation_wraps_body_in_data() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/reservations"))
        .and(body_json(json!({
            "data": {
                "first_name": "Ada",
                "last_name": "Lovelace",
                "mobile_number": "555-1234",
                "reservation_date": "2024-06-12",
                "reservation_time": "18:30",
                "people": 4
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "data": reservation_json(11) })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let created = client.create_reservation(&payload()).await.unwrap();

    assert_eq!(created.reservation_id, 11);
    assert_eq!(created.reservation_time, NaiveTime::from_hms_opt(18, 30, 0).unwrap());
}

#[tokio::test]
async fn test_edit_reservation_uses_put_with_id() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/reservations/11"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "message": "OK",
            "data": reservation_json(11)
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let updated = client.edit_reservation(&payload(), 11).await.unwrap();
    assert_eq!(updated.reservation_id, 11);
}

#[tokio::test]
async fn test_search_by_number_sends_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reservations"))
        .and(query_param("mobile_number", "555"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [reservation_json(1), reservation_json(2)]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let found = client.search_by_number(" 555 ").await.unwrap();
    assert_eq!(found.len(), 2);
    assert_eq!(found[1].reservation_id, 2);
}

#[tokio::test]
async fn test_legacy_error_body_becomes_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/reservations"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "error": "reservation_date is a Tuesday" })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.create_reservation(&payload()).await.unwrap_err();

    assert_eq!(err.user_message(), "reservation_date is a Tuesday");
    assert_eq!(err.code(), ErrorCode::ValidationFailed);
}

#[tokio::test]
async fn test_structured_error_keeps_code() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/reservations/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": 4001,
            "message": "Reservation 99 cannot be found."
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.edit_reservation(&payload(), 99).await.unwrap_err();

    match err {
        ClientError::Api { code, status, message } => {
            assert_eq!(code, ErrorCode::ReservationNotFound);
            assert_eq!(status, 404);
            assert_eq!(message, "Reservation 99 cannot be found.");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_data_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reservations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "code": 0, "message": "OK" })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.search_by_number("555").await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse(_)));
}
