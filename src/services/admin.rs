//! Daily booking listing for the shop owner

use super::require_date;
use crate::error::AppError;
use crate::models::Booking;
use crate::store::ScheduleStore;
use std::sync::Arc;

/// Lists the bookings of a day
///
/// No access control: any caller may list bookings.
#[derive(Clone)]
pub struct AdminQueryService {
    store: Arc<dyn ScheduleStore>,
}

impl AdminQueryService {
    /// Create a service over `store`
    pub fn new(store: Arc<dyn ScheduleStore>) -> Self {
        Self { store }
    }

    /// Bookings on `date`, ordered by slot ascending
    pub async fn list_bookings(&self, date: &str) -> Result<Vec<Booking>, AppError> {
        let date = require_date(date)?;
        let mut bookings = self
            .store
            .list_for_date(date)
            .await
            .map_err(AppError::storage("Erro ao buscar agendamentos"))?;

        // Zero-padded HH:MM sorts chronologically
        bookings.sort_by(|a, b| a.slot.cmp(&b.slot));
        Ok(bookings)
    }
}
