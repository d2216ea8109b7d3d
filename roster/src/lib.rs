//! Sortable roster of delegates.
//!
//! Two numeric columns can be sorted: delegator count and locked total.
//! Sorting never mutates a caller's rows: [`sort_rows`] returns a new vector
//! and the [`Roster`] component only reorders the rows it owns.
//!
//! Toggle rule: a repeated request on the active field flips descending to
//! ascending; anything else lands on descending.

pub mod error;
pub mod format;
pub mod roster;
pub mod sort;

pub use error::RosterError;
pub use format::{delegate_label, explorer_link, format_lock_total};
pub use roster::{
    HeaderCell, Roster, RosterLine, RosterView, DEFAULT_EXPLORER, PLACEHOLDER_COLUMNS,
    PLACEHOLDER_ROWS,
};
pub use sort::{sort_rows, SortDirection, SortField, SortState};
