//! Shared utilities for votelens.

pub mod format;
pub mod logging;

pub use format::{abbreviate, format_grouped, group_thousands, k_format, round_to};
pub use logging::{init_logging, LogFormat};
