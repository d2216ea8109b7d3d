//! Nullable selection sink that records selection updates for assertions.

use votelens_types::{Selection, SelectionSink};

/// One call made on a [`SelectionSink`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SinkCall {
    Address(Option<String>),
    Delegate(Option<String>),
}

/// A selection sink that remembers every call, in order.
#[derive(Debug, Default)]
pub struct NullSelectionSink {
    calls: Vec<SinkCall>,
    current: Selection,
}

impl NullSelectionSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call received so far.
    pub fn calls(&self) -> &[SinkCall] {
        &self.calls
    }

    /// The selection obtained by applying every call in order.
    pub fn current(&self) -> &Selection {
        &self.current
    }

    /// Forget recorded calls but keep the current selection.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl SelectionSink for NullSelectionSink {
    fn set_selected_address(&mut self, address: Option<String>) {
        self.calls.push(SinkCall::Address(address.clone()));
        self.current.address = address;
    }

    fn set_selected_delegate(&mut self, delegate: Option<String>) {
        self.calls.push(SinkCall::Delegate(delegate.clone()));
        self.current.delegate = delegate;
    }
}
