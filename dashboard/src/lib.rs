//! Delegation dashboard.
//!
//! The dashboard is the parent of the vote-weight chart and the delegate
//! roster. It owns the one [`Selection`](votelens_types::Selection) both
//! components write to, the configuration they are built from, and the
//! snapshot loader used to feed them.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod snapshot;

pub use config::DashboardConfig;
pub use dashboard::Dashboard;
pub use error::DashboardError;
pub use snapshot::Snapshot;
