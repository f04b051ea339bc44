use agenda_api::middleware::error_handling::{AppError, FAILURE_MESSAGE};
use agenda_core::errors::BookingError;
use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};
use rstest::rstest;

#[rstest]
#[case(BookingError::Store(eyre::eyre!("connection refused")))]
#[case(BookingError::Completion(eyre::eyre!("invalid api key")))]
#[case(BookingError::Gateway(eyre::eyre!("instance offline")))]
#[case(BookingError::Validation("missing field `message`".to_string()))]
#[case(BookingError::Internal(Box::new(std::io::Error::new(
    std::io::ErrorKind::Other,
    "Internal error",
))))]
#[tokio::test]
async fn test_every_error_maps_to_generic_failure(#[case] error: BookingError) {
    let response = AppError(error).into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], FAILURE_MESSAGE.as_bytes());
}

#[test]
fn test_error_detail_is_not_exposed() {
    let error = AppError(BookingError::Store(eyre::eyre!("password=hunter2")));

    assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!FAILURE_MESSAGE.contains("hunter2"));
}

#[test]
fn test_from_booking_error() {
    let error: AppError = BookingError::Validation("bad".to_string()).into();

    assert!(matches!(error.0, BookingError::Validation(_)));
}
