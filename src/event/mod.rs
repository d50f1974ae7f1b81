mod bus;
mod events;

pub use bus::ChangeBus;
pub use events::HistoryChange;

use crate::element::Drawable;

/// Callback invoked synchronously after every history mutation with the
/// committed items in draw order.
pub type ChangeHandler = Box<dyn FnMut(&HistoryChange, &[Drawable])>;
