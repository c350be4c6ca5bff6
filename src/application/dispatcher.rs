use crate::domain::ports::PaymentStrategyBox;
use crate::domain::request::PaymentRequest;
use crate::error::{PaymentError, Result};
use std::collections::HashMap;
use tracing::debug;

/// The main entry point for payment processing.
///
/// `StrategyRegistry` owns the mapping from provider key to strategy
/// implementation. It is populated during process initialization and
/// read-only afterwards: `dispatch` takes `&self`, so a registry shared
/// behind `Arc` serves concurrent callers without locking.
pub struct StrategyRegistry {
    strategies: HashMap<String, PaymentStrategyBox>,
}

impl StrategyRegistry {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self {
            strategies: HashMap::new(),
        }
    }

    /// Registers `strategy` under `key`, replacing any previous entry.
    pub fn register(&mut self, key: impl Into<String>, strategy: PaymentStrategyBox) {
        let key = key.into();
        debug!(provider = %key, "registering payment strategy");
        self.strategies.insert(key, strategy);
    }

    /// Resolves the strategy for `request.payment_type` and invokes it.
    ///
    /// Returns the strategy's confirmation message unchanged, or
    /// [`PaymentError::StrategyNotFound`] naming the unresolved key.
    pub fn dispatch(&self, request: &PaymentRequest) -> Result<String> {
        let strategy = self
            .strategies
            .get(&request.payment_type)
            .ok_or_else(|| PaymentError::StrategyNotFound(request.payment_type.clone()))?;

        debug!(provider = %request.payment_type, "dispatching payment request");
        Ok(strategy.pay(
            &request.amount,
            &request.payment_type,
            &request.sender,
            &request.receiver,
        ))
    }

    /// Returns true if a strategy is registered under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.strategies.contains_key(key)
    }

    /// Lists the registered provider keys, in no particular order.
    pub fn providers(&self) -> Vec<&str> {
        self.strategies.keys().map(|k| k.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}
