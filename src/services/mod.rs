//! Scheduling services
//!
//! Availability, booking and admin queries over a shared [`ScheduleStore`].
//!
//! [`ScheduleStore`]: crate::store::ScheduleStore

pub mod admin;
pub mod availability;
pub mod booking;

pub use admin::AdminQueryService;
pub use availability::AvailabilityService;
pub use booking::{BookingService, MIN_PHONE_DIGITS};

use crate::error::ValidationError;

/// Reject a missing or blank date, returning it trimmed otherwise
pub(crate) fn require_date(date: &str) -> Result<&str, ValidationError> {
    let date = date.trim();
    if date.is_empty() {
        return Err(ValidationError::MissingDate);
    }
    Ok(date)
}
