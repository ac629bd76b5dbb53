use crate::core::types::Slot;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Composite key for one cell of the picker grid.
pub type SlotKey = (NaiveDate, Slot);

/// Selected-or-not flags keyed by (date, slot). Entries are created lazily on
/// the first toggle; a missing entry means unselected. Owned by the
/// presentation layer, which is also responsible for refusing to toggle cells
/// the availability rules reject. The map itself does no gating.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    flags: BTreeMap<SlotKey, bool>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the flag for `(date, slot)` and return its new value.
    pub fn toggle(&mut self, date: NaiveDate, slot: Slot) -> bool {
        let flag = self.flags.entry((date, slot)).or_insert(false);
        *flag = !*flag;
        *flag
    }

    pub fn is_selected(&self, date: NaiveDate, slot: Slot) -> bool {
        self.flags.get(&(date, slot)).copied().unwrap_or(false)
    }

    /// Currently-selected keys in chronological order.
    pub fn selected(&self) -> impl Iterator<Item = &SlotKey> {
        self.flags
            .iter()
            .filter(|&(_, &selected)| selected)
            .map(|(key, _)| key)
    }

    pub fn selected_count(&self) -> usize {
        self.flags.values().filter(|&&selected| selected).count()
    }
}
