//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::calculator::responses::CalculatorErrorResponse;
use crate::calculator::CalculationError;
use crate::share::ShareError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Calculation(#[from] CalculationError),

    #[error("Share error: {0}")]
    Share(#[from] ShareError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Calculation(e) => {
                let (error_type, details) = match e {
                    CalculationError::InvalidNumber { field } => {
                        ("invalid_number", Some(serde_json::json!({ "field": field })))
                    }
                    CalculationError::Overflow => ("overflow", None),
                };
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    CalculatorErrorResponse {
                        error_type: error_type.to_string(),
                        message: e.to_string(),
                        details,
                    },
                )
            }
            AppError::Share(e) => {
                tracing::error!("Share error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    CalculatorErrorResponse {
                        error_type: "share_error".to_string(),
                        message: "Could not build share message".to_string(),
                        details: None,
                    },
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    CalculatorErrorResponse {
                        error_type: "internal_error".to_string(),
                        message: "Internal error".to_string(),
                        details: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
