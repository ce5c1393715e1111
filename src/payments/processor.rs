use crate::blockchain::TxBuilder;
use crate::observability::metrics;
use crate::payments::types::{PaymentError, PaymentReceipt, PaymentRequest};
use crate::quoting::{QuoteEngine, QuoteRequest};
use tracing::{info, warn};

/// Turns an explicit pay action into a signed, submitted transfer.
#[derive(Debug, Clone)]
pub struct PaymentProcessor {
    quotes: QuoteEngine,
    tx_builder: TxBuilder,
}

impl PaymentProcessor {
    pub fn new(quotes: QuoteEngine, tx_builder: TxBuilder) -> Self {
        Self { quotes, tx_builder }
    }

    /// Pay a candidate for their hours from the session wallet.
    ///
    /// Pricing errors are returned before any RPC call is made.
    pub async fn pay(&self, request: PaymentRequest) -> Result<PaymentReceipt, PaymentError> {
        let quote = self.quotes.quote(&QuoteRequest {
            candidate: request.candidate,
            hours: request.hours,
        })?;

        info!(
            candidate = %quote.candidate,
            hours = quote.hours,
            to = %quote.recipient,
            value_wei = %quote.total_cost_wei,
            "Paying candidate"
        );

        match self.tx_builder.send(quote.recipient, quote.total_cost_wei).await {
            Ok(submitted) => {
                metrics::record_payment("submitted", &quote.total_cost_wei);
                Ok(PaymentReceipt::new(quote, submitted))
            }
            Err(e) => {
                warn!(candidate = %quote.candidate, error = %e, "Payment failed");
                metrics::record_payment("failed", &quote.total_cost_wei);
                Err(e.into())
            }
        }
    }

    /// The account payments are sent from.
    pub fn payer(&self) -> alloy::primitives::Address {
        self.tx_builder.address()
    }
}
