//! Error types and error handling for the application
//!
//! Validation and storage failures are typed separately so services can
//! report them precisely; `AppError` maps them onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// A request rejected before it reaches the store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more of name, phone, date, slot is missing or blank
    #[error("Todos os campos são obrigatórios")]
    MissingFields,

    /// The date query parameter is missing or blank
    #[error("Informe a data")]
    MissingDate,

    /// Phone has fewer digits than a full area code plus number
    #[error("Telefone inválido: {digits} dígitos, mínimo {minimum}")]
    PhoneTooShort {
        /// Digits found after stripping formatting
        digits: usize,
        /// Required minimum
        minimum: usize,
    },

    /// The request body is not a JSON booking
    #[error("Corpo da requisição inválido: {0}")]
    InvalidBody(String),

    /// The slot is not one of the configured working slots
    #[error("Horário inválido: {0}")]
    UnknownSlot(String),
}

/// Failures of the schedule store
#[derive(Error, Debug)]
pub enum StoreError {
    /// Could not open or configure the database
    #[error("Failed to connect to database: {0}")]
    Connection(#[source] sqlx::Error),

    /// The connection string names a database other than SQLite
    #[error("Unsupported database URL {0}, expected a sqlite: URL or a file path")]
    UnsupportedUrl(String),

    /// Schema creation failed
    #[error("Migration failed: {0}")]
    Migration(#[source] sqlx::Error),

    /// A read or write query failed
    #[error("Query failed: {0}")]
    Query(#[source] sqlx::Error),

    /// A booking already exists for this date and slot
    #[error("Slot {slot} on {date} is already booked")]
    SlotTaken {
        /// Date of the conflicting booking
        date: String,
        /// Slot of the conflicting booking
        slot: String,
    },
}

/// Application-level error types
///
/// Every handler returns this; each variant converts to an HTTP response
/// via `IntoResponse`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Client sent an incomplete or malformed request
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Storage failed while performing `operation`
    #[error("{operation}: {source}")]
    Storage {
        /// Terse, user-facing description of what failed
        operation: &'static str,
        /// Underlying store failure, logged but never sent to the client
        #[source]
        source: StoreError,
    },
}

impl AppError {
    /// Wrap a store failure with the user-facing operation message
    pub fn storage(operation: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| AppError::Storage { operation, source }
    }

    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Storage {
                source: StoreError::SlotTaken { .. },
                ..
            } => StatusCode::CONFLICT,
            AppError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match &self {
            AppError::Validation(e) => e.to_string(),
            AppError::Storage {
                source: StoreError::SlotTaken { .. },
                ..
            } => "Horário já reservado".to_string(),
            AppError::Storage { operation, source } => {
                error!("{}: {}", operation, source);
                operation.to_string()
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
