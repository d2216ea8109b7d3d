//! Top-level error type shared across crates.

use thiserror::Error;

/// Common error type for the votelens data model.
#[derive(Debug, Error, PartialEq)]
pub enum TypesError {
    #[error("invalid account address: {0}")]
    InvalidAddress(String),

    #[error("invalid amount {amount} for {address}: amounts must be finite and non-negative")]
    InvalidAmount { address: String, amount: f64 },

    #[error("invalid lock total {value:?} for delegate {delegate}")]
    InvalidLockTotal { delegate: String, value: String },
}
