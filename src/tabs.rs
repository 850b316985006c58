//! Tab Set
//!
//! Exactly one tab is active; panes and button styles derive from it.

const ACTIVE_CLASS: &str = "tab-btn active text-white border-accent-500";
const INACTIVE_CLASS: &str = "tab-btn text-gray-400 border-transparent";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSet {
    tabs: Vec<Tab>,
    active: &'static str,
}

impl TabSet {
    /// The first tab starts active; an empty set has no active tab.
    pub fn new(tabs: Vec<Tab>) -> Self {
        let active = tabs.first().map(|tab| tab.id).unwrap_or_default();
        Self { tabs, active }
    }

    /// Activate `id`; unknown ids are ignored.
    pub fn select(&mut self, id: &str) -> bool {
        match self.tabs.iter().find(|tab| tab.id == id) {
            Some(tab) => {
                self.active = tab.id;
                true
            }
            None => false,
        }
    }

    pub fn active(&self) -> &'static str {
        self.active
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active == id
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn button_class(&self, id: &str) -> &'static str {
        if self.is_active(id) {
            ACTIVE_CLASS
        } else {
            INACTIVE_CLASS
        }
    }

    pub fn pane_class(&self, id: &str) -> &'static str {
        if self.is_active(id) {
            "tab-content active"
        } else {
            "tab-content hidden"
        }
    }
}
