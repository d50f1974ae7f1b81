/// What just happened to the drawing history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryChange {
    /// A new stroke was committed at gesture start
    StrokeBegun,
    /// The active stroke gained a point
    StrokeExtended,
    /// A stamp was committed
    StampPlaced,
    /// The newest item moved to the redo buffer
    Undone,
    /// The newest undone item came back
    Redone,
    /// History and redo buffer were emptied
    Cleared,
}

impl HistoryChange {
    /// Whether the change commits a new item and so invalidates redo
    pub fn is_commit(self) -> bool {
        matches!(self, HistoryChange::StrokeBegun | HistoryChange::StampPlaced)
    }
}
