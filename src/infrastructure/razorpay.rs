use crate::domain::ports::PaymentStrategy;
use tracing::debug;

/// Payment strategy for the Razorpay provider.
#[derive(Debug, Default, Clone)]
pub struct RazorpayStrategy;

impl RazorpayStrategy {
    /// Creates a new Razorpay strategy.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PaymentStrategy for RazorpayStrategy {
    fn name(&self) -> &'static str {
        "razorpay"
    }

    fn pay(&self, amount: &str, mode: &str, sender: &str, receiver: &str) -> String {
        debug!(provider = "razorpay", %amount, %sender, %receiver, "processing payment");
        format!("paid with razorpay {amount} from {sender} to {receiver} using mode {mode}")
    }
}
