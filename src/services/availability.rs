//! Free-slot computation

use super::require_date;
use crate::error::AppError;
use crate::models::WorkSlots;
use crate::store::ScheduleStore;
use std::collections::HashSet;
use std::sync::Arc;

/// Computes which working slots are still free on a date
#[derive(Clone)]
pub struct AvailabilityService {
    store: Arc<dyn ScheduleStore>,
    work_slots: Arc<WorkSlots>,
}

impl AvailabilityService {
    /// Create a service over `store` offering `work_slots`
    pub fn new(store: Arc<dyn ScheduleStore>, work_slots: Arc<WorkSlots>) -> Self {
        Self { store, work_slots }
    }

    /// Working slots minus the slots booked on `date`, in working-slot order
    ///
    /// Dates are not interpreted: an unknown date simply has no bookings.
    pub async fn available_slots(&self, date: &str) -> Result<Vec<String>, AppError> {
        let date = require_date(date)?;
        let booked: HashSet<String> = self
            .store
            .booked_slots(date)
            .await
            .map_err(AppError::storage("Erro ao buscar horários"))?
            .into_iter()
            .collect();

        Ok(self
            .work_slots
            .iter()
            .filter(|slot| !booked.contains(*slot))
            .map(str::to_string)
            .collect())
    }
}
