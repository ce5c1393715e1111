//! Server-rendered page.
//!
//! Each interaction (picking a candidate, moving the hours slider, pressing
//! pay) is one request; the handler renders the whole page from the request
//! alone. Only `POST /pay` ever builds a transaction.

use alloy::primitives::{TxHash, U256};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;
use std::fmt::Write;

use crate::catalog::{self, Candidate};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::payments::PaymentRequest;
use crate::quoting::{display_ether, DEFAULT_HOURS, MAX_HOURS, MIN_HOURS};

const TITLE: &str = "Fintech Finder";
const ICON: &str = "data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>💸</text></svg>";

/// Page selection carried in the query string.
///
/// Hours stay raw text so a malformed value falls back like any other bad
/// selection instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub candidate: Option<String>,
    pub hours: Option<String>,
}

impl PageParams {
    fn hours(&self) -> Option<u32> {
        self.hours.as_deref().and_then(|h| h.trim().parse().ok())
    }
}

/// Result of a pay action, shown above the candidate panel.
#[derive(Debug)]
enum Outcome {
    None,
    Sent(TxHash),
    Failed(String),
}

/// Resolve a selection; unknown names fall back to the first candidate and
/// hours are clamped into the slider range.
fn select(candidate: Option<&str>, hours: Option<u32>) -> (&'static Candidate, u32) {
    let candidate = candidate
        .and_then(catalog::find)
        .unwrap_or_else(catalog::default_candidate);
    let hours = hours.unwrap_or(DEFAULT_HOURS).clamp(MIN_HOURS, MAX_HOURS);
    (candidate, hours)
}

pub async fn index(State(state): State<AppState>, Query(params): Query<PageParams>) -> Response {
    let (candidate, hours) = select(params.candidate.as_deref(), params.hours());
    render(&state, candidate, hours, Outcome::None, StatusCode::OK).await
}

pub async fn pay(State(state): State<AppState>, Form(request): Form<PaymentRequest>) -> Response {
    let (candidate, hours) = select(Some(&request.candidate), Some(request.hours));

    match state.payments.pay(request).await {
        Ok(receipt) => {
            render(&state, candidate, hours, Outcome::Sent(receipt.tx_hash), StatusCode::OK).await
        }
        Err(e) => {
            let err = ApiError::from(e);
            render(&state, candidate, hours, Outcome::Failed(err.message), err.status).await
        }
    }
}

async fn render(
    state: &AppState,
    candidate: &Candidate,
    hours: u32,
    outcome: Outcome,
    status: StatusCode,
) -> Response {
    let balance = state
        .client
        .get_balance(state.payer)
        .await
        .map_err(|e| e.to_string());
    let html = render_html(state, candidate, hours, &balance, &outcome);
    (status, Html(html)).into_response()
}

fn render_html(
    state: &AppState,
    selected: &Candidate,
    hours: u32,
    balance: &Result<U256, String>,
    outcome: &Outcome,
) -> String {
    let mut html = String::with_capacity(4096);
    let _ = write!(
        html,
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{TITLE}</title>\
         <link rel=\"icon\" href=\"{ICON}\"></head><body style=\"display:flex\">"
    );

    // Sidebar: account and candidate selector.
    let _ = write!(
        html,
        "<aside style=\"width:22rem;padding:1rem\"><h2>Menu</h2>\
         <img src=\"/Images/user_image.jpg\" width=\"200\" alt=\"\">\
         <h3 id=\"address\">{}</h3>",
        state.payer
    );
    match balance {
        Ok(wei) => {
            let _ = write!(html, "<h3 id=\"balance\">{} Wei</h3>", wei);
        }
        Err(e) => {
            let _ = write!(
                html,
                "<p id=\"balance-error\">Balance unavailable: {}</p>",
                escape_html(e)
            );
        }
    }
    html.push_str(
        "<form method=\"get\" action=\"/\"><fieldset><legend>Select a Candidate</legend>",
    );
    for candidate in catalog::all() {
        let checked = if candidate.name == selected.name { " checked" } else { "" };
        let _ = write!(
            html,
            "<label><input type=\"radio\" name=\"candidate\" value=\"{name}\"{checked} \
             onchange=\"this.form.submit()\"> {name}</label><br>",
            name = candidate.name,
        );
    }
    let _ = write!(
        html,
        "</fieldset><input type=\"hidden\" name=\"hours\" value=\"{hours}\"></form></aside>"
    );

    // Main panel.
    let _ = write!(html, "<main style=\"padding:1rem\"><h1>{TITLE}</h1>");
    match outcome {
        Outcome::None => {}
        Outcome::Sent(hash) => {
            let _ = write!(
                html,
                "<p id=\"success\">Transaction sent! Transaction hash: {}</p>",
                hash
            );
        }
        Outcome::Failed(message) => {
            let _ = write!(
                html,
                "<p id=\"error\">Payment failed: {}</p>",
                escape_html(message)
            );
        }
    }

    let total_wei = selected.hourly_rate_wei * U256::from(hours);
    let _ = write!(
        html,
        "<img src=\"/{image}\" width=\"300\" alt=\"{name}\">\
         <p><b>Name:</b> {name}</p>\
         <p><b>Rating:</b> {rating} stars</p>\
         <p><b>Hourly cost per Ether:</b> {rate} Ether</p>\
         <form method=\"get\" action=\"/\">\
         <input type=\"hidden\" name=\"candidate\" value=\"{name}\">\
         <label>Select hours worked <input type=\"range\" name=\"hours\" min=\"{MIN_HOURS}\" \
         max=\"{MAX_HOURS}\" value=\"{hours}\" onchange=\"this.form.submit()\"> {hours}</label>\
         </form>\
         <p id=\"total\"><b>Total:</b> {total} Ether ({total_wei} Wei)</p>\
         <form method=\"post\" action=\"/pay\">\
         <input type=\"hidden\" name=\"candidate\" value=\"{name}\">\
         <input type=\"hidden\" name=\"hours\" value=\"{hours}\">\
         <button type=\"submit\">Pay Candidate</button></form></main></body></html>",
        image = selected.image,
        name = selected.name,
        rating = selected.rating,
        rate = display_ether(selected.hourly_rate_wei),
        total = display_ether(total_wei),
    );

    html
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
