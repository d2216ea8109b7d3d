//! Sunburst chart component: dataset in, view and selection updates out.

use crate::click::{resolve_click, Slice};
use crate::node::{project, HierarchyNode};
use serde::Serialize;
use votelens_types::{GroupedBalances, LoadState, SelectionSink};

/// What the rendering layer should draw.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartView {
    /// Dataset still loading: draw a skeleton under the title.
    Placeholder { title: String },
    /// Dataset ready: draw the hierarchy with the category colors.
    Chart {
        title: String,
        root: HierarchyNode,
        colors: Vec<String>,
    },
}

/// A sunburst of vote weights that routes leaf clicks to a selection sink.
pub struct SunburstChart {
    title: String,
    colors: Vec<String>,
    data: LoadState<GroupedBalances>,
}

impl SunburstChart {
    pub fn new(title: impl Into<String>, colors: Vec<String>) -> Self {
        Self {
            title: title.into(),
            colors,
            data: LoadState::Loading,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn data(&self) -> &LoadState<GroupedBalances> {
        &self.data
    }

    /// Replace the dataset. The hierarchy is re-projected on the next [`view`](Self::view).
    pub fn set_data(&mut self, data: LoadState<GroupedBalances>) {
        self.data = data;
    }

    pub fn view(&self) -> ChartView {
        match &self.data {
            LoadState::Loading => ChartView::Placeholder {
                title: self.title.clone(),
            },
            LoadState::Ready(balances) => ChartView::Chart {
                title: self.title.clone(),
                root: project(balances),
                colors: self.colors.clone(),
            },
        }
    }

    /// Handle a click on a chart node.
    ///
    /// Returns `true` if a selection was emitted. No sink method is called
    /// for no-op clicks or while the dataset is loading.
    pub fn click(&self, slice: &Slice, sink: &mut dyn SelectionSink) -> bool {
        let LoadState::Ready(balances) = &self.data else {
            return false;
        };
        match resolve_click(balances, slice) {
            Some(selection) => {
                selection.emit(sink);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::Branch;
    use votelens_nullables::{NullSelectionSink, SinkCall};
    use votelens_types::BalanceEntry;

    fn chart_with_data() -> SunburstChart {
        let mut chart = SunburstChart::new("Vote weights", vec!["#1aab9b".into()]);
        chart.set_data(LoadState::Ready(GroupedBalances {
            recognized_delegates: vec![BalanceEntry::named("Alice", "0xalice", 500.0)],
            shadow_delegates: vec![BalanceEntry::new("0xshadow", 300.0)],
            users: vec![],
        }));
        chart
    }

    #[test]
    fn test_loading_renders_placeholder() {
        let chart = SunburstChart::new("Vote weights", vec![]);
        assert_eq!(
            chart.view(),
            ChartView::Placeholder {
                title: "Vote weights".to_string()
            }
        );
    }

    #[test]
    fn test_ready_renders_projection_and_colors() {
        let chart = chart_with_data();
        match chart.view() {
            ChartView::Chart { root, colors, .. } => {
                assert_eq!(root.children.len(), 3);
                assert_eq!(colors, vec!["#1aab9b".to_string()]);
            }
            other => panic!("expected chart, got {other:?}"),
        }
    }

    #[test]
    fn test_click_emits_address_then_delegate() {
        let chart = chart_with_data();
        let mut sink = NullSelectionSink::new();
        assert!(chart.click(&Slice::leaf(Branch::Recognized, "Alice"), &mut sink));
        assert_eq!(
            sink.calls(),
            &[
                SinkCall::Address(Some("0xalice".to_string())),
                SinkCall::Delegate(Some("Alice".to_string())),
            ]
        );
    }

    #[test]
    fn test_noop_clicks_make_no_calls() {
        let chart = chart_with_data();
        let mut sink = NullSelectionSink::new();
        assert!(!chart.click(&Slice::root(), &mut sink));
        assert!(!chart.click(&Slice::branch(Branch::Shadow), &mut sink));
        assert!(!chart.click(&Slice::leaf(Branch::Recognized, "Nobody"), &mut sink));
        assert!(sink.calls().is_empty());
    }

    #[test]
    fn test_click_while_loading_is_noop() {
        let chart = SunburstChart::new("Vote weights", vec![]);
        let mut sink = NullSelectionSink::new();
        assert!(!chart.click(&Slice::leaf(Branch::User, "0xuser"), &mut sink));
        assert!(sink.calls().is_empty());
    }
}
