//! Domain layer: the payment request model and the strategy port.

pub mod ports;
pub mod request;
