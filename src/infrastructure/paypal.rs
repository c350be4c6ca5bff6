use crate::domain::ports::PaymentStrategy;
use tracing::debug;

/// Payment strategy for the PayPal provider.
///
/// Stateless: every call formats the confirmation message and nothing else,
/// so instances can be shared freely across threads.
#[derive(Debug, Default, Clone)]
pub struct PaypalStrategy;

impl PaypalStrategy {
    /// Creates a new PayPal strategy.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PaymentStrategy for PaypalStrategy {
    fn name(&self) -> &'static str {
        "paypal"
    }

    fn pay(&self, amount: &str, mode: &str, sender: &str, receiver: &str) -> String {
        debug!(provider = "paypal", %amount, %sender, %receiver, "processing payment");
        format!("paid with paypal {amount} from {sender} to {receiver} using mode {mode}")
    }
}
