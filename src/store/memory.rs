//! In-process booking store
//!
//! Used when no database is configured. Contents are lost on restart.

use super::ScheduleStore;
use crate::error::StoreError;
use crate::models::Booking;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

/// Bookings held in an insertion-ordered list
#[derive(Debug, Default)]
pub struct MemoryStore {
    bookings: RwLock<Vec<Booking>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ScheduleStore for MemoryStore {
    fn kind(&self) -> &'static str {
        "memory"
    }

    fn is_durable(&self) -> bool {
        false
    }

    async fn booked_slots(&self, date: &str) -> Result<Vec<String>, StoreError> {
        let bookings = self.bookings.read().await;
        Ok(bookings
            .iter()
            .filter(|b| b.date == date)
            .map(|b| b.slot.clone())
            .collect())
    }

    async fn insert(&self, booking: &Booking) -> Result<(), StoreError> {
        // Check and push under one write lock so concurrent inserts serialize
        let mut bookings = self.bookings.write().await;
        if bookings
            .iter()
            .any(|b| b.date == booking.date && b.slot == booking.slot)
        {
            return Err(StoreError::SlotTaken {
                date: booking.date.clone(),
                slot: booking.slot.clone(),
            });
        }

        bookings.push(booking.clone());
        debug!(
            "Stored booking {} {} in memory ({} total)",
            booking.date,
            booking.slot,
            bookings.len()
        );
        Ok(())
    }

    async fn list_for_date(&self, date: &str) -> Result<Vec<Booking>, StoreError> {
        let bookings = self.bookings.read().await;
        let mut day: Vec<Booking> = bookings.iter().filter(|b| b.date == date).cloned().collect();
        day.sort_by(|a, b| a.slot.cmp(&b.slot));
        Ok(day)
    }
}
