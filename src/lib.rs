//! Barber Booking Backend Library
//!
//! Slot availability, booking and daily listing for a single-chair shop.
//! The main binary is in `src/main.rs`.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
/// Shared application state handed to the HTTP handlers
pub mod state;
pub mod store;
