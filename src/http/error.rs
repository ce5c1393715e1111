//! Mapping of domain errors onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::blockchain::BlockchainError;
use crate::payments::PaymentError;
use crate::quoting::QuoteError;

/// An error ready to be sent to the client as `{"error": message}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl From<QuoteError> for ApiError {
    fn from(err: QuoteError) -> Self {
        let status = match err {
            QuoteError::UnknownCandidate(_) => StatusCode::NOT_FOUND,
            QuoteError::HoursOutOfRange { .. } => StatusCode::BAD_REQUEST,
        };
        Self::new(status, err.to_string())
    }
}

impl From<BlockchainError> for ApiError {
    fn from(err: BlockchainError) -> Self {
        let status = match err {
            BlockchainError::Rpc(_) | BlockchainError::ChainMismatch { .. } => {
                StatusCode::BAD_GATEWAY
            }
            BlockchainError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            BlockchainError::GasPriceTooHigh { .. } => StatusCode::SERVICE_UNAVAILABLE,
            BlockchainError::Wallet(_) | BlockchainError::Signing(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self::new(status, err.to_string())
    }
}

impl From<PaymentError> for ApiError {
    fn from(err: PaymentError) -> Self {
        match err {
            PaymentError::Quote(e) => e.into(),
            PaymentError::Blockchain(e) => e.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
