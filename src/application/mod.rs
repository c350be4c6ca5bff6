//! Application layer containing the core dispatch orchestration.
//!
//! This module defines the `StrategyRegistry`, which acts as the primary
//! entry point for processing payment requests. Strategies are registered
//! under string keys at startup and the table is read-only afterwards.

pub mod dispatcher;
