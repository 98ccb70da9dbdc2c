//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::pricing::responses::ErrorResponse;
use crate::pricing::PricingError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Status code and the message shown to the caller
    fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Pricing(PricingError::MissingDates) => {
                (StatusCode::BAD_REQUEST, "Fechas requeridas")
            }
            AppError::Pricing(PricingError::InvalidDate { .. }) => {
                (StatusCode::BAD_REQUEST, "Formato de fecha inválido")
            }
            AppError::Pricing(PricingError::InvalidPeriod { .. }) => {
                (StatusCode::BAD_REQUEST, "Periodo inválido")
            }
            AppError::Pricing(PricingError::StayTooLong { .. }) => {
                (StatusCode::BAD_REQUEST, "Periodo demasiado largo")
            }
            AppError::Pricing(PricingError::Catalog(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Error al obtener temporadas")
            }
            AppError::Pricing(PricingError::MalformedSeason { .. }) | AppError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Error interno")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        if status.is_server_error() {
            tracing::error!("Error calculating price: {}", self);
        } else {
            tracing::debug!("Rejected pricing request: {}", self);
        }

        let body = ErrorResponse {
            error: message.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
