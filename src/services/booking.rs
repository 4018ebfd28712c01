//! Booking creation and validation

use crate::error::{AppError, ValidationError};
use crate::models::{Booking, BookingRequest, WorkSlots};
use crate::store::ScheduleStore;
use std::sync::Arc;
use tracing::info;

/// Area code plus subscriber number
pub const MIN_PHONE_DIGITS: usize = 10;

/// Validates booking requests and persists accepted ones
#[derive(Clone)]
pub struct BookingService {
    store: Arc<dyn ScheduleStore>,
    work_slots: Arc<WorkSlots>,
}

impl BookingService {
    /// Create a service over `store` accepting slots from `work_slots`
    pub fn new(store: Arc<dyn ScheduleStore>, work_slots: Arc<WorkSlots>) -> Self {
        Self { store, work_slots }
    }

    /// Validate and store a booking
    ///
    /// Does not check availability first; a slot that is already taken is
    /// refused by the store and reported as a conflict.
    pub async fn create_booking(&self, request: BookingRequest) -> Result<Booking, AppError> {
        let booking = self.validate(request)?;

        self.store
            .insert(&booking)
            .await
            .map_err(AppError::storage("Erro ao salvar agendamento"))?;

        info!(
            "Booked {} {} for {} ({})",
            booking.date,
            booking.slot,
            booking.client_name,
            self.store.kind()
        );
        Ok(booking)
    }

    /// Check a request and turn it into a booking record
    ///
    /// Checks run in order: all fields present, phone length, slot
    /// membership. Values are trimmed.
    pub fn validate(&self, request: BookingRequest) -> Result<Booking, ValidationError> {
        let (Some(client_name), Some(client_phone), Some(date), Some(slot)) = (
            required(request.client_name),
            required(request.client_phone),
            required(request.date),
            required(request.slot),
        ) else {
            return Err(ValidationError::MissingFields);
        };

        let digits = phone_digits(&client_phone);
        if digits < MIN_PHONE_DIGITS {
            return Err(ValidationError::PhoneTooShort {
                digits,
                minimum: MIN_PHONE_DIGITS,
            });
        }

        if !self.work_slots.contains(&slot) {
            return Err(ValidationError::UnknownSlot(slot));
        }

        Ok(Booking::new(client_name, client_phone, date, slot))
    }

    /// Confirmation text, noting when bookings will not survive a restart
    pub fn confirmation_message(&self) -> &'static str {
        if self.store.is_durable() {
            "Agendamento realizado com sucesso!"
        } else {
            "Agendamento realizado com sucesso (memória)!"
        }
    }
}

fn required(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Number of ASCII digits in a formatted phone number
pub fn phone_digits(phone: &str) -> usize {
    phone.chars().filter(|c| c.is_ascii_digit()).count()
}
