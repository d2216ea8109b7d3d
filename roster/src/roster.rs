//! Roster component: owns its rows and sort state, emits row selections.

use crate::error::RosterError;
use crate::format::{delegate_label, explorer_link, format_lock_total};
use crate::sort::{sort_rows, SortDirection, SortField, SortState};
use serde::Serialize;
use votelens_types::{DelegateRow, LoadState, Selection, SelectionSink};

/// Placeholder grid shown while the roster loads.
pub const PLACEHOLDER_ROWS: usize = 8;
pub const PLACEHOLDER_COLUMNS: usize = 3;

/// Default block explorer for row links.
pub const DEFAULT_EXPLORER: &str = "https://etherscan.io";

/// A sortable column header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HeaderCell {
    pub field: SortField,
    pub label: &'static str,
    pub active: bool,
    /// Current direction for the active column, descending otherwise.
    pub direction: SortDirection,
}

/// One rendered table row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RosterLine {
    pub delegate: String,
    pub delegators: String,
    pub lock_total: String,
    pub link: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RosterView {
    Placeholder { rows: usize, columns: usize },
    Rows { lines: Vec<RosterLine> },
}

/// Delegate table with in-session sort state.
///
/// Rows handed to [`Roster::set_rows`] are owned by the roster; sorting
/// reorders that copy only.
pub struct Roster {
    title: String,
    rows: LoadState<Vec<DelegateRow>>,
    sort: SortState,
    explorer_base: String,
    placeholder: (usize, usize),
}

impl Roster {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            rows: LoadState::Loading,
            sort: SortState::default(),
            explorer_base: DEFAULT_EXPLORER.to_string(),
            placeholder: (PLACEHOLDER_ROWS, PLACEHOLDER_COLUMNS),
        }
    }

    pub fn with_explorer(mut self, base_url: impl Into<String>) -> Self {
        self.explorer_base = base_url.into();
        self
    }

    pub fn with_placeholder(mut self, rows: usize, columns: usize) -> Self {
        self.placeholder = (rows, columns);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    pub fn rows(&self) -> &LoadState<Vec<DelegateRow>> {
        &self.rows
    }

    /// Replace the rows. They are shown in the given order until the next
    /// sort request; the sort state itself is kept.
    pub fn set_rows(&mut self, rows: LoadState<Vec<DelegateRow>>) {
        self.rows = rows;
    }

    /// Apply a header click on `field` and return the new sort state.
    ///
    /// The state toggles even while loading, matching a header that stays
    /// clickable over the placeholder grid.
    pub fn request_sort(&mut self, field: SortField) -> SortState {
        self.sort = self.sort.toggle(field);
        if let LoadState::Ready(rows) = &self.rows {
            self.rows = LoadState::Ready(sort_rows(rows, self.sort));
        }
        tracing::debug!(
            field = self.sort.field.as_str(),
            direction = self.sort.direction.as_str(),
            "roster sort requested"
        );
        self.sort
    }

    /// Handle a click on row `index`, emitting its address and name.
    pub fn click_row(&self, index: usize, sink: &mut dyn SelectionSink) -> Result<(), RosterError> {
        let rows = self.rows.as_ref().ok_or(RosterError::Loading)?;
        let row = rows.get(index).ok_or(RosterError::RowOutOfRange {
            index,
            len: rows.len(),
        })?;
        Selection::new(row.vote_delegate.as_str(), row.name.clone()).emit(sink);
        Ok(())
    }

    pub fn header(&self, field: SortField) -> HeaderCell {
        let active = self.sort.field == field;
        HeaderCell {
            field,
            label: field.label(),
            active,
            direction: if active {
                self.sort.direction
            } else {
                SortDirection::Descending
            },
        }
    }

    /// Headers of the sortable columns, in display order.
    pub fn headers(&self) -> Vec<HeaderCell> {
        SortField::ALL.into_iter().map(|f| self.header(f)).collect()
    }

    pub fn view(&self) -> RosterView {
        match &self.rows {
            LoadState::Loading => RosterView::Placeholder {
                rows: self.placeholder.0,
                columns: self.placeholder.1,
            },
            LoadState::Ready(rows) => RosterView::Rows {
                lines: rows
                    .iter()
                    .map(|row| RosterLine {
                        delegate: delegate_label(row),
                        delegators: row.delegator_count.to_string(),
                        lock_total: format_lock_total(&row.lock_total),
                        link: explorer_link(&self.explorer_base, row),
                    })
                    .collect(),
            },
        }
    }
}
