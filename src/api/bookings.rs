//! Booking API handlers
//!
//! Creation for clients, daily listing for the shop.

use super::DateQuery;
use crate::error::{AppError, ValidationError};
use crate::models::{Booking, BookingRequest};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Serialize;

/// Booking created response
#[derive(Debug, Serialize)]
pub struct BookingCreatedResponse {
    /// Human-readable confirmation
    pub message: String,
    /// The stored booking
    #[serde(rename = "agendamento")]
    pub booking: Booking,
}

/// POST /api/agendar - Create a booking
///
/// A body that is not a JSON booking is a validation failure like any other.
pub async fn create_booking(
    State(state): State<AppState>,
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BookingCreatedResponse>), AppError> {
    let Json(request) = payload.map_err(|e| ValidationError::InvalidBody(e.body_text()))?;
    let booking = state.booking.create_booking(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(BookingCreatedResponse {
            message: state.booking.confirmation_message().to_string(),
            booking,
        }),
    ))
}

/// GET /api/agendamentos?data= - Bookings of a day ordered by slot
pub async fn list_bookings(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let bookings = state.admin.list_bookings(query.date()).await?;
    Ok(Json(bookings))
}
