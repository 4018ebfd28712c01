//! Booking data models
//!
//! Defines the bookable slot list, the persisted booking record and the
//! inbound booking request.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;

/// Slots of the default working day (lunch break at 13:00)
pub const DEFAULT_WORK_SLOTS: [&str; 8] = [
    "09:00", "10:00", "11:00", "12:00", "14:00", "15:00", "16:00", "17:00",
];

/// Reasons a configured slot list is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkSlotsError {
    /// No slots were given
    #[error("slot list is empty")]
    Empty,

    /// A slot is not a valid time of day
    #[error("invalid slot {0:?}, expected HH:MM")]
    InvalidTime(String),

    /// The same slot appears twice
    #[error("duplicate slot {0}")]
    Duplicate(String),
}

/// Ordered, duplicate-free list of bookable `HH:MM` slots
///
/// Identical for every date. Availability output follows this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkSlots(Vec<String>);

impl WorkSlots {
    /// Parse and canonicalize a list of times of day
    ///
    /// Accepts `H:MM` or `HH:MM` (surrounding whitespace ignored) and stores
    /// every entry zero-padded so lexicographic order matches chronological
    /// order.
    pub fn parse<I, S>(slots: I) -> Result<Self, WorkSlotsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut canonical: Vec<String> = Vec::new();
        for raw in slots {
            let raw = raw.as_ref().trim();
            let time = NaiveTime::parse_from_str(raw, "%H:%M")
                .map_err(|_| WorkSlotsError::InvalidTime(raw.to_string()))?;
            let slot = time.format("%H:%M").to_string();
            if canonical.contains(&slot) {
                return Err(WorkSlotsError::Duplicate(slot));
            }
            canonical.push(slot);
        }

        if canonical.is_empty() {
            return Err(WorkSlotsError::Empty);
        }
        Ok(Self(canonical))
    }

    /// Whether `slot` is one of the bookable slots
    pub fn contains(&self, slot: &str) -> bool {
        self.0.iter().any(|s| s == slot)
    }

    /// Iterate the slots in configured order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// The slots as a slice
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Number of slots
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list has no slots (never true once parsed)
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for WorkSlots {
    fn default() -> Self {
        Self(DEFAULT_WORK_SLOTS.iter().map(|s| s.to_string()).collect())
    }
}

/// A client's booking of one slot on one date
///
/// Serialized with the field names the booking pages use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Booking {
    /// Client name
    #[serde(rename = "nome")]
    pub client_name: String,
    /// Client phone, stored as typed
    #[serde(rename = "telefone")]
    pub client_phone: String,
    /// Calendar date, opaque key (e.g. `2025-10-31`)
    #[serde(rename = "data")]
    pub date: String,
    /// Booked slot (`HH:MM`)
    #[serde(rename = "hora")]
    pub slot: String,
}

impl Booking {
    /// Create a new booking
    pub fn new(client_name: String, client_phone: String, date: String, slot: String) -> Self {
        Self {
            client_name,
            client_phone,
            date,
            slot,
        }
    }
}

/// Inbound booking request
///
/// Every field is optional here so that a missing field is reported as a
/// validation failure instead of a body rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingRequest {
    /// Client name
    #[serde(rename = "nome")]
    pub client_name: Option<String>,
    /// Client phone
    #[serde(rename = "telefone")]
    pub client_phone: Option<String>,
    /// Calendar date
    #[serde(rename = "data")]
    pub date: Option<String>,
    /// Requested slot
    #[serde(rename = "hora")]
    pub slot: Option<String>,
}

impl BookingRequest {
    /// Build a request with every field present
    pub fn new(
        client_name: impl Into<String>,
        client_phone: impl Into<String>,
        date: impl Into<String>,
        slot: impl Into<String>,
    ) -> Self {
        Self {
            client_name: Some(client_name.into()),
            client_phone: Some(client_phone.into()),
            date: Some(date.into()),
            slot: Some(slot.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_work_slots() {
        let slots = WorkSlots::default();
        assert_eq!(slots.len(), 8);
        assert!(slots.contains("09:00"));
        assert!(!slots.contains("13:00"));
    }

    #[test]
    fn test_parse_canonicalizes_and_keeps_order() {
        let slots = WorkSlots::parse(["14:00", "9:00", " 10:30 "]).unwrap();
        assert_eq!(slots.as_slice(), ["14:00", "09:00", "10:30"]);
    }

    #[test]
    fn test_parse_rejects_bad_lists() {
        assert_eq!(
            WorkSlots::parse(Vec::<String>::new()),
            Err(WorkSlotsError::Empty)
        );
        assert_eq!(
            WorkSlots::parse(["09:00", "25:00"]),
            Err(WorkSlotsError::InvalidTime("25:00".to_string()))
        );
        assert_eq!(
            WorkSlots::parse(["09:00", "9:00"]),
            Err(WorkSlotsError::Duplicate("09:00".to_string()))
        );
    }

    #[test]
    fn test_booking_wire_names() {
        let booking = Booking::new(
            "Ana".to_string(),
            "11987654321".to_string(),
            "2025-10-31".to_string(),
            "10:00".to_string(),
        );
        let json = serde_json::to_value(&booking).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "nome": "Ana",
                "telefone": "11987654321",
                "data": "2025-10-31",
                "hora": "10:00",
            })
        );
    }

    #[test]
    fn test_booking_request_tolerates_missing_fields() {
        let request: BookingRequest =
            serde_json::from_str(r#"{"nome": "Ana", "hora": null}"#).unwrap();
        assert_eq!(request.client_name.as_deref(), Some("Ana"));
        assert!(request.client_phone.is_none());
        assert!(request.slot.is_none());
    }
}
