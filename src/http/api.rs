//! JSON API handlers under `/api/v1`.

use alloy::primitives::{Address, U256};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::{self, Candidate};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::payments::PaymentRequest;
use crate::quoting::{display_ether, Quote, QuoteError, QuoteRequest};

/// The session account as shown to users.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountView {
    pub address: Address,
    #[serde(with = "crate::quoting::types::wei_string")]
    pub balance_wei: U256,
    pub balance_ether: String,
}

/// A catalog entry as shown to users.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateView {
    pub name: String,
    pub address: Address,
    pub rating: String,
    /// Hourly rate in Ether.
    pub hourly_rate: String,
    #[serde(with = "crate::quoting::types::wei_string")]
    pub hourly_rate_wei: U256,
    pub image: String,
}

impl From<&Candidate> for CandidateView {
    fn from(candidate: &Candidate) -> Self {
        Self {
            name: candidate.name.to_string(),
            address: candidate.address,
            rating: candidate.rating.to_string(),
            hourly_rate: display_ether(candidate.hourly_rate_wei),
            hourly_rate_wei: candidate.hourly_rate_wei,
            image: candidate.image.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub payer: Address,
    pub blockchain_reachable: bool,
}

pub async fn get_account(State(state): State<AppState>) -> Result<Json<AccountView>, ApiError> {
    let balance_wei = state.client.get_balance(state.payer).await?;
    Ok(Json(AccountView {
        address: state.payer,
        balance_wei,
        balance_ether: display_ether(balance_wei),
    }))
}

pub async fn list_candidates() -> Json<Vec<CandidateView>> {
    Json(catalog::all().iter().map(CandidateView::from).collect())
}

pub async fn get_candidate(Path(name): Path<String>) -> Result<Json<CandidateView>, ApiError> {
    catalog::find(&name)
        .map(|c| Json(CandidateView::from(c)))
        .ok_or_else(|| QuoteError::UnknownCandidate(name).into())
}

pub async fn get_quote(
    State(state): State<AppState>,
    Query(request): Query<QuoteRequest>,
) -> Result<Json<Quote>, ApiError> {
    Ok(Json(state.quotes.quote(&request)?))
}

pub async fn pay_candidate(
    State(state): State<AppState>,
    Json(request): Json<PaymentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let receipt = state.payments.pay(request).await?;
    Ok((StatusCode::CREATED, Json(receipt)))
}

pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        payer: state.payer,
        blockchain_reachable: state.client.is_healthy().await,
    })
}
