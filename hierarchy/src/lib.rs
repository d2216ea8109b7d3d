//! Vote-weight hierarchy for a sunburst-style chart.
//!
//! Grouped balances are projected into a fixed three-branch tree:
//! vote weights → {Recognized delegates, Shadow delegates, Users} → holders.
//!
//! Key principle: recognized-delegate leaves are keyed by display name, every
//! other leaf by address. Click routing depends on that asymmetry, so the
//! branch is decoded into [`Branch`] once and each variant carries its own
//! lookup strategy.

pub mod branch;
pub mod chart;
pub mod click;
pub mod node;
pub mod tooltip;

pub use branch::Branch;
pub use chart::{ChartView, SunburstChart};
pub use click::{duplicate_recognized_names, resolve_click, Slice};
pub use node::{project, project_state, HierarchyNode, ROOT_NAME};
pub use tooltip::{tooltip_label, tooltip_text};
