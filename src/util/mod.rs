//! Utilities shared across services.

pub mod lock;
