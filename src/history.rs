use crate::element::{Drawable, Point, Stamp, Stroke};
use crate::event::{ChangeBus, HistoryChange};
use crate::tool::{MarkerColor, THICKNESS_RANGE};

/// Owns the committed drawing and the redo buffer.
///
/// All mutation of either stack goes through here. Items are committed once,
/// at gesture start; the live stroke is then extended in place through an
/// index into `history`, which is only ever the tail.
#[derive(Debug, Default)]
pub struct HistoryManager {
    /// Committed items in draw order
    history: Vec<Drawable>,
    /// Undone items, newest on top
    redo_stack: Vec<Drawable>,
    /// Index of the stroke owned by the in-progress gesture
    active: Option<usize>,
    bus: ChangeBus,
}

impl HistoryManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a change observer. Observers run synchronously after each
    /// mutating operation, in registration order.
    pub fn on_change(&mut self, handler: impl FnMut(&HistoryChange, &[Drawable]) + 'static) {
        self.bus.subscribe(Box::new(handler));
    }

    /// Commit a new one-point stroke and make it the active stroke.
    /// Thickness is clamped to `THICKNESS_RANGE`.
    pub fn begin_stroke(&mut self, point: Point, thickness: u32, color: MarkerColor) {
        self.interrupt_gesture("Stroke");
        let thickness = thickness.clamp(*THICKNESS_RANGE.start(), *THICKNESS_RANGE.end());
        self.redo_stack.clear();
        self.history
            .push(Drawable::Stroke(Stroke::new(point, thickness, color)));
        self.active = Some(self.history.len() - 1);
        self.notify(HistoryChange::StrokeBegun);
    }

    /// Commit a stamp. Stamps are atomic so no stroke becomes active.
    pub fn begin_stamp(&mut self, point: Point, symbol: &str, size: f32) {
        self.interrupt_gesture("Stamp");
        self.redo_stack.clear();
        self.history
            .push(Drawable::Stamp(Stamp::new(symbol, point, size)));
        self.notify(HistoryChange::StampPlaced);
    }

    /// Append a point to the active stroke, if any
    pub fn extend_active_stroke(&mut self, point: Point) {
        let Some(index) = self.active else {
            return;
        };
        if let Some(Drawable::Stroke(stroke)) = self.history.get_mut(index) {
            stroke.drag(point);
            self.notify(HistoryChange::StrokeExtended);
        }
    }

    /// Release the active stroke; it stays in the history as is
    pub fn end_gesture(&mut self) {
        self.active = None;
    }

    /// Move the newest item onto the redo buffer. Returns false when there
    /// was nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.end_gesture();
        let Some(item) = self.history.pop() else {
            return false;
        };
        self.redo_stack.push(item);
        self.notify(HistoryChange::Undone);
        true
    }

    /// Bring back the most recently undone item. Returns false when the redo
    /// buffer was empty.
    pub fn redo(&mut self) -> bool {
        self.end_gesture();
        let Some(item) = self.redo_stack.pop() else {
            return false;
        };
        self.history.push(item);
        self.notify(HistoryChange::Redone);
        true
    }

    /// Empty both stacks unconditionally
    pub fn clear(&mut self) {
        self.end_gesture();
        self.history.clear();
        self.redo_stack.clear();
        self.notify(HistoryChange::Cleared);
    }

    /// Committed items in draw order
    pub fn items(&self) -> &[Drawable] {
        &self.history
    }

    /// Undone items, bottom first; the next redo takes the last one
    pub fn redo_items(&self) -> &[Drawable] {
        &self.redo_stack
    }

    pub fn active_stroke(&self) -> Option<&Stroke> {
        self.active
            .and_then(|index| self.history.get(index))
            .and_then(Drawable::as_stroke)
    }

    pub fn is_gesture_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    fn interrupt_gesture(&mut self, what: &str) {
        if self.active.is_some() {
            log::warn!("{what} started while another gesture was active");
            self.end_gesture();
        }
    }

    fn notify(&mut self, change: HistoryChange) {
        debug_assert!(!change.is_commit() || self.redo_stack.is_empty());
        self.bus.emit(change, &self.history);
    }
}
