//! API module
//!
//! HTTP request handlers for slot availability, booking creation and the
//! daily booking list.

pub mod bookings;
pub mod slots;

use crate::state::AppState;
use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};

/// `?data=` query parameter shared by the date-scoped endpoints
#[derive(Debug, Default, Deserialize)]
pub struct DateQuery {
    /// Requested date, opaque string (e.g. `2025-10-31`)
    pub data: Option<String>,
}

impl DateQuery {
    /// The requested date, empty when absent
    pub fn date(&self) -> &str {
        self.data.as_deref().unwrap_or_default()
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"healthy"` when the process answers
    pub status: String,
    /// Crate version
    pub version: String,
    /// Active storage backing
    pub storage: String,
}

/// Routes of the booking API, without middleware
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/horarios-disponiveis", get(slots::available_slots))
        .route("/api/agendar", post(bookings::create_booking))
        .route("/api/agendamentos", get(bookings::list_bookings))
        .with_state(state)
}

/// GET /api/health - Liveness and active backing
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        storage: state.storage_kind().to_string(),
    })
}
