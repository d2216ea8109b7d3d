//! The parent component: owns the selection and both child components.

use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::snapshot::Snapshot;
use votelens_hierarchy::{duplicate_recognized_names, tooltip_text, ChartView, Slice, SunburstChart};
use votelens_roster::{HeaderCell, Roster, RosterView, SortField, SortState};
use votelens_types::{DelegateRow, GroupedBalances, LoadState, Selection};

/// Vote-weight chart and delegate roster sharing one selection.
pub struct Dashboard {
    config: DashboardConfig,
    chart: SunburstChart,
    roster: Roster,
    selection: Selection,
}

impl Dashboard {
    pub fn new(config: DashboardConfig) -> Self {
        let chart = SunburstChart::new(config.chart_title.clone(), config.chart_colors.clone());
        let roster = Roster::new(config.roster_title.clone())
            .with_explorer(config.explorer_base_url.clone())
            .with_placeholder(config.placeholder_rows, config.placeholder_columns);
        Self {
            config,
            chart,
            roster,
            selection: Selection::default(),
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Feed both datasets from a snapshot. Sections absent from the snapshot
    /// stay loading.
    ///
    /// Both sections are checked before either is loaded, so an invalid
    /// snapshot leaves the dashboard unchanged.
    pub fn load_snapshot(&mut self, snapshot: Snapshot) -> Result<(), DashboardError> {
        if let Some(balances) = &snapshot.balances {
            balances.validate()?;
        }
        if let Some(delegates) = &snapshot.delegates {
            delegates.iter().try_for_each(DelegateRow::validate)?;
        }
        if let Some(balances) = snapshot.balances {
            self.commit_balances(balances);
        }
        if let Some(delegates) = snapshot.delegates {
            self.commit_delegates(delegates);
        }
        Ok(())
    }

    /// Hand the chart a ready dataset after checking its amounts.
    pub fn load_balances(&mut self, balances: GroupedBalances) -> Result<(), DashboardError> {
        balances.validate()?;
        self.commit_balances(balances);
        Ok(())
    }

    /// Hand the roster a ready list of delegates after checking their totals.
    pub fn load_delegates(&mut self, delegates: Vec<DelegateRow>) -> Result<(), DashboardError> {
        delegates.iter().try_for_each(DelegateRow::validate)?;
        self.commit_delegates(delegates);
        Ok(())
    }

    fn commit_balances(&mut self, balances: GroupedBalances) {
        for (name, count) in duplicate_recognized_names(&balances) {
            tracing::warn!(%name, count, "recognized delegates share a display name");
        }
        tracing::info!(holders = balances.len(), "vote-weight balances loaded");
        self.chart.set_data(LoadState::Ready(balances));
    }

    fn commit_delegates(&mut self, delegates: Vec<DelegateRow>) {
        tracing::info!(delegates = delegates.len(), "delegate roster loaded");
        self.roster.set_rows(LoadState::Ready(delegates));
    }

    /// Handle a chart click. Returns whether the selection changed hands.
    pub fn click_slice(&mut self, slice: &Slice) -> bool {
        self.chart.click(slice, &mut self.selection)
    }

    /// Handle a roster row click.
    pub fn click_row(&mut self, index: usize) -> Result<(), DashboardError> {
        self.roster.click_row(index, &mut self.selection)?;
        Ok(())
    }

    pub fn request_sort(&mut self, field: SortField) -> SortState {
        self.roster.request_sort(field)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn clear_selection(&mut self) {
        self.selection = Selection::default();
    }

    pub fn chart_view(&self) -> ChartView {
        self.chart.view()
    }

    pub fn roster_view(&self) -> RosterView {
        self.roster.view()
    }

    pub fn roster_headers(&self) -> Vec<HeaderCell> {
        self.roster.headers()
    }

    /// Tooltip for a chart node, using the configured currency symbol.
    pub fn tooltip(&self, id: &str, value: f64, formatted_value: &str) -> String {
        tooltip_text(id, value, formatted_value, &self.config.currency_symbol)
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(DashboardConfig::default())
    }
}
