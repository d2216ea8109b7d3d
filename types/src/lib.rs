//! Fundamental types for votelens.
//!
//! This crate defines the data model shared across every other crate in the workspace:
//! account addresses, grouped vote-weight balances, delegate roster rows, the
//! loading/ready state of a dataset, and the selection sink components write to.

pub mod address;
pub mod balance;
pub mod delegate;
pub mod error;
pub mod load_state;
pub mod selection;

pub use address::Address;
pub use balance::{BalanceEntry, GroupedBalances};
pub use delegate::{DelegateRow, LockTotal};
pub use error::TypesError;
pub use load_state::LoadState;
pub use selection::{Selection, SelectionSink};
