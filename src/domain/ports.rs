/// An interchangeable payment processor, selected at runtime by provider key.
///
/// Implementations are stateless string formatters: `pay` must be
/// deterministic and free of side effects other than diagnostic logging.
pub trait PaymentStrategy: Send + Sync {
    /// The provider key this strategy answers to (e.g. "paypal").
    fn name(&self) -> &'static str;

    /// Processes a payment and returns the confirmation message.
    ///
    /// `mode` is the provider key the request was dispatched under.
    fn pay(&self, amount: &str, mode: &str, sender: &str, receiver: &str) -> String;
}

pub type PaymentStrategyBox = Box<dyn PaymentStrategy>;
