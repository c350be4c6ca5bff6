//! Interfaces layer: adapters that feed external request formats into the
//! dispatcher.

pub mod csv;
pub mod json;
