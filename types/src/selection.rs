//! Selection state and the sink components write it through.

use serde::{Deserialize, Serialize};

/// Currently selected account and, when known, the delegate's display name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub address: Option<String>,
    pub delegate: Option<String>,
}

impl Selection {
    pub fn new(address: impl Into<String>, delegate: Option<String>) -> Self {
        Self {
            address: Some(address.into()),
            delegate,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.address.is_none() && self.delegate.is_none()
    }

    /// Write this selection into `sink`, address first.
    pub fn emit(self, sink: &mut dyn SelectionSink) {
        sink.set_selected_address(self.address);
        sink.set_selected_delegate(self.delegate);
    }
}

/// Where components send selection updates.
///
/// Components only ever write; the owner of the selection decides what to do
/// with each update.
pub trait SelectionSink {
    fn set_selected_address(&mut self, address: Option<String>);
    fn set_selected_delegate(&mut self, delegate: Option<String>);
}

impl SelectionSink for Selection {
    fn set_selected_address(&mut self, address: Option<String>) {
        self.address = address;
    }

    fn set_selected_delegate(&mut self, delegate: Option<String>) {
        self.delegate = delegate;
    }
}
