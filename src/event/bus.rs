use super::{ChangeHandler, HistoryChange};
use crate::element::Drawable;

/// A simple observer list for broadcasting history changes to subscribers
#[derive(Default)]
pub struct ChangeBus {
    handlers: Vec<ChangeHandler>,
}

impl std::fmt::Debug for ChangeBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeBus")
            .field("handlers", &format!("<{} handlers>", self.handlers.len()))
            .finish()
    }
}

impl ChangeBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe a handler to receive changes
    pub fn subscribe(&mut self, handler: ChangeHandler) {
        self.handlers.push(handler);
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Emit a change to all registered handlers, in subscription order
    pub fn emit(&mut self, change: HistoryChange, items: &[Drawable]) {
        log::debug!("History changed: {change:?} ({} items)", items.len());
        for handler in &mut self.handlers {
            handler(&change, items);
        }
    }
}
