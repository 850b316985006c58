//! Dashboard Selection State
//!
//! The confirmation gate for the destructive reset and the product
//! selection for catalog sync.

use std::collections::BTreeSet;

/// A destructive action that stays disabled until confirmed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfirmGate {
    confirmed: bool,
}

impl ConfirmGate {
    pub fn set_confirmed(&mut self, confirmed: bool) {
        self.confirmed = confirmed;
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    pub fn button_disabled(&self) -> bool {
        !self.confirmed
    }

    pub fn opacity_class(&self) -> &'static str {
        if self.confirmed {
            "opacity-100"
        } else {
            "opacity-50"
        }
    }
}

/// Checked products on the sync tab
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SyncSelection {
    ids: Vec<u32>,
    selected: BTreeSet<u32>,
}

impl SyncSelection {
    pub fn new(ids: impl IntoIterator<Item = u32>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
            selected: BTreeSet::new(),
        }
    }

    pub fn select_all(&mut self, checked: bool) {
        if checked {
            self.selected = self.ids.iter().copied().collect();
        } else {
            self.selected.clear();
        }
    }

    /// Set one product; ids not on the tab are ignored
    pub fn set(&mut self, id: u32, checked: bool) {
        if !self.ids.contains(&id) {
            return;
        }
        if checked {
            self.selected.insert(id);
        } else {
            self.selected.remove(&id);
        }
    }

    pub fn is_selected(&self, id: u32) -> bool {
        self.selected.contains(&id)
    }

    pub fn selected(&self) -> Vec<u32> {
        self.selected.iter().copied().collect()
    }

    pub fn all_selected(&self) -> bool {
        !self.ids.is_empty() && self.selected.len() == self.ids.len()
    }

    pub fn can_sync(&self) -> bool {
        !self.selected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_follows_checkbox() {
        let mut gate = ConfirmGate::default();
        assert!(gate.button_disabled());
        assert_eq!(gate.opacity_class(), "opacity-50");

        gate.set_confirmed(true);
        assert!(!gate.button_disabled());
        assert_eq!(gate.opacity_class(), "opacity-100");

        gate.set_confirmed(false);
        assert!(gate.button_disabled());
    }

    #[test]
    fn test_nothing_selected_cannot_sync() {
        let selection = SyncSelection::new([1, 2, 3]);
        assert!(!selection.can_sync());
        assert!(!selection.all_selected());
    }

    #[test]
    fn test_select_all_and_back() {
        let mut selection = SyncSelection::new([1, 2, 3]);
        selection.select_all(true);
        assert!(selection.all_selected());
        assert_eq!(selection.selected(), vec![1, 2, 3]);

        selection.set(2, false);
        assert!(!selection.all_selected());
        assert!(selection.can_sync());

        selection.select_all(false);
        assert!(!selection.can_sync());
    }

    #[test]
    fn test_single_checks_complete_selection() {
        let mut selection = SyncSelection::new([7, 9]);
        selection.set(7, true);
        selection.set(9, true);
        assert!(selection.all_selected());
    }

    #[test]
    fn test_unknown_id_ignored() {
        let mut selection = SyncSelection::new([1]);
        selection.set(42, true);
        assert!(!selection.can_sync());
    }

    #[test]
    fn test_empty_list_never_all_selected() {
        let mut selection = SyncSelection::new([]);
        selection.select_all(true);
        assert!(!selection.all_selected());
        assert!(!selection.can_sync());
    }
}
