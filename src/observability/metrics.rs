//! Metrics collection and exposition.
//!
//! # Metrics
//! - `finder_requests_total` (counter): requests by method, route, status
//! - `finder_request_duration_seconds` (histogram): latency distribution
//! - `finder_payments_total` (counter): pay actions by outcome
//! - `finder_payment_value_ether` (histogram): amounts paid
//! - `finder_rpc_healthy` (gauge): 1=node reachable, 0=unreachable
//!
//! Recording is a no-op until [`init_metrics`] installs the exporter.

use std::net::SocketAddr;
use std::time::Instant;

use alloy::primitives::U256;
use metrics::{counter, gauge, histogram, Label};
use metrics_exporter_prometheus::PrometheusBuilder;

use crate::quoting::display_ether;

/// Install the Prometheus exporter with its own HTTP listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one handled HTTP request.
pub fn record_request(method: &str, route: &str, status: u16, start: Instant) {
    let labels = vec![
        Label::new("method", method.to_string()),
        Label::new("route", route.to_string()),
        Label::new("status", status.to_string()),
    ];
    counter!("finder_requests_total", labels.clone()).increment(1);
    histogram!("finder_request_duration_seconds", labels).record(start.elapsed().as_secs_f64());
}

/// Record the outcome of a pay action.
pub fn record_payment(outcome: &'static str, value_wei: &U256) {
    counter!("finder_payments_total", "outcome" => outcome).increment(1);
    if outcome == "submitted" {
        let ether: f64 = display_ether(*value_wei).parse().unwrap_or_default();
        histogram!("finder_payment_value_ether").record(ether);
    }
}

/// Record whether the blockchain node answered.
pub fn record_rpc_health(healthy: bool) {
    gauge!("finder_rpc_healthy").set(if healthy { 1.0 } else { 0.0 });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_without_exporter_is_noop() {
        record_request("GET", "/", 200, Instant::now());
        record_payment("submitted", &U256::from(1u64));
        record_payment("failed", &U256::ZERO);
        record_rpc_health(false);
    }
}
