//! Slot availability API handler

use super::DateQuery;
use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    response::Json,
};

/// GET /api/horarios-disponiveis?data= - Free slots of a day, in working order
pub async fn available_slots(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<Json<Vec<String>>, AppError> {
    let slots = state.availability.available_slots(query.date()).await?;
    Ok(Json(slots))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::models::WorkSlots;
    use crate::store::MemoryStore;
    use std::sync::Arc;

    fn create_test_state() -> AppState {
        AppState::new(Arc::new(MemoryStore::new()), WorkSlots::default())
    }

    #[tokio::test]
    async fn test_available_slots_full_day() {
        let query = DateQuery {
            data: Some("2025-10-31".to_string()),
        };
        let Json(slots) = available_slots(State(create_test_state()), Query(query))
            .await
            .unwrap();
        assert_eq!(slots, WorkSlots::default().as_slice());
    }

    #[tokio::test]
    async fn test_available_slots_without_date() {
        let result = available_slots(State(create_test_state()), Query(DateQuery::default())).await;
        match result {
            Err(AppError::Validation(ValidationError::MissingDate)) => {}
            other => panic!("Expected MissingDate error, got: {:?}", other.map(|j| j.0)),
        }
    }
}
