//! Shared application state
//!
//! Built once at startup from the chosen store and handed to every handler.

use crate::models::WorkSlots;
use crate::services::{AdminQueryService, AvailabilityService, BookingService};
use crate::store::ScheduleStore;
use std::sync::Arc;

/// Services sharing one schedule store
#[derive(Clone)]
pub struct AppState {
    /// Free-slot queries
    pub availability: AvailabilityService,
    /// Booking creation
    pub booking: BookingService,
    /// Daily listing
    pub admin: AdminQueryService,
    store: Arc<dyn ScheduleStore>,
}

impl AppState {
    /// Wire the services over `store`
    pub fn new(store: Arc<dyn ScheduleStore>, work_slots: WorkSlots) -> Self {
        let work_slots = Arc::new(work_slots);
        Self {
            availability: AvailabilityService::new(Arc::clone(&store), Arc::clone(&work_slots)),
            booking: BookingService::new(Arc::clone(&store), work_slots),
            admin: AdminQueryService::new(Arc::clone(&store)),
            store,
        }
    }

    /// Name of the active backing
    pub fn storage_kind(&self) -> &'static str {
        self.store.kind()
    }
}
