//! Integration tests for the booking flow
//!
//! Runs the same client/admin scenarios against the in-memory and SQLite
//! backings through the public service API.

use barber_booking_backend::error::{AppError, ValidationError};
use barber_booking_backend::models::{Booking, BookingRequest, WorkSlots};
use barber_booking_backend::state::AppState;
use barber_booking_backend::store::{MemoryStore, ScheduleStore, SqliteStore};
use std::sync::Arc;
use tempfile::TempDir;

const DAY: &str = "2025-10-31";

fn three_slots() -> WorkSlots {
    WorkSlots::parse(["09:00", "10:00", "11:00"]).unwrap()
}

async fn sqlite_store(dir: &TempDir) -> Arc<dyn ScheduleStore> {
    let path = dir.path().join("bookings.db");
    Arc::new(SqliteStore::new(path.to_str().unwrap(), 5).await.unwrap())
}

async fn book_and_list(state: AppState) {
    assert_eq!(
        state.availability.available_slots(DAY).await.unwrap(),
        ["09:00", "10:00", "11:00"]
    );

    state
        .booking
        .create_booking(BookingRequest::new("Ana", "11987654321", DAY, "10:00"))
        .await
        .unwrap();

    assert_eq!(
        state.availability.available_slots(DAY).await.unwrap(),
        ["09:00", "11:00"]
    );
    assert_eq!(
        state.admin.list_bookings(DAY).await.unwrap(),
        vec![Booking::new(
            "Ana".to_string(),
            "11987654321".to_string(),
            DAY.to_string(),
            "10:00".to_string(),
        )]
    );
}

async fn short_phone_leaves_day_untouched(state: AppState) {
    let err = state
        .booking
        .create_booking(BookingRequest::new("Bob", "123", DAY, "09:00"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::Validation(ValidationError::PhoneTooShort { digits: 3, .. })
    ));

    assert_eq!(
        state.availability.available_slots(DAY).await.unwrap(),
        ["09:00", "10:00", "11:00"]
    );
    assert!(state.admin.list_bookings(DAY).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_book_and_list_in_memory() {
    book_and_list(AppState::new(Arc::new(MemoryStore::new()), three_slots())).await;
}

#[tokio::test]
async fn test_book_and_list_sqlite() {
    let dir = TempDir::new().unwrap();
    book_and_list(AppState::new(sqlite_store(&dir).await, three_slots())).await;
}

#[tokio::test]
async fn test_short_phone_in_memory() {
    short_phone_leaves_day_untouched(AppState::new(
        Arc::new(MemoryStore::new()),
        three_slots(),
    ))
    .await;
}

#[tokio::test]
async fn test_short_phone_sqlite() {
    let dir = TempDir::new().unwrap();
    short_phone_leaves_day_untouched(AppState::new(sqlite_store(&dir).await, three_slots()))
        .await;
}

#[tokio::test]
async fn test_sqlite_refuses_double_booking() {
    let dir = TempDir::new().unwrap();
    let state = AppState::new(sqlite_store(&dir).await, three_slots());
    let request = BookingRequest::new("Ana", "11987654321", DAY, "09:00");

    state.booking.create_booking(request.clone()).await.unwrap();
    let err = state.booking.create_booking(request).await.unwrap_err();

    assert_eq!(err.status(), axum::http::StatusCode::CONFLICT);
    assert_eq!(state.admin.list_bookings(DAY).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_sqlite_bookings_survive_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let state = AppState::new(sqlite_store(&dir).await, three_slots());
        state
            .booking
            .create_booking(BookingRequest::new("Ana", "(11) 98765-4321", DAY, "11:00"))
            .await
            .unwrap();
    }

    let state = AppState::new(sqlite_store(&dir).await, three_slots());
    assert_eq!(
        state.availability.available_slots(DAY).await.unwrap(),
        ["09:00", "10:00"]
    );
    assert_eq!(state.storage_kind(), "sqlite");
}
