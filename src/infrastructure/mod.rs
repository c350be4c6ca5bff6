//! Concrete payment strategy implementations, one per provider.

pub mod paypal;
pub mod razorpay;
