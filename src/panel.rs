//! Panel Controller
//!
//! Explicit open/closed state for the slide-in panels. Overlay visibility
//! and the body scroll lock are derived from it, so they can never disagree
//! with the panels themselves.

use serde::Deserialize;

/// Identity of a slide-in panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelId {
    Cart,
    Filter,
    Search,
}

impl PanelId {
    pub const ALL: [PanelId; 3] = [PanelId::Cart, PanelId::Filter, PanelId::Search];

    /// Transform that slides the panel off-screen
    pub fn closed_transform(&self) -> &'static str {
        match self {
            PanelId::Cart => "translate-x-full",
            PanelId::Filter => "-translate-x-full",
            PanelId::Search => "-translate-y-full",
        }
    }

    pub fn open_transform(&self) -> &'static str {
        match self {
            PanelId::Cart | PanelId::Filter => "translate-x-0",
            PanelId::Search => "translate-y-0",
        }
    }

    /// Base classes for positioning the panel
    fn base_class(&self) -> &'static str {
        match self {
            PanelId::Cart => "cart-panel fixed inset-y-0 right-0 w-full max-w-md",
            PanelId::Filter => "filter-panel fixed inset-y-0 left-0 w-full max-w-xs",
            PanelId::Search => "search-panel fixed inset-x-0 top-0",
        }
    }

    pub fn dom_id(&self) -> &'static str {
        match self {
            PanelId::Cart => "cart-panel",
            PanelId::Filter => "filter-panel",
            PanelId::Search => "mobile-search-panel",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    Open,
    #[default]
    Closed,
}

/// State of every panel on the page
///
/// Panels not mounted on the page can never open. At most one panel is open
/// at any time: opening one closes the others.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Panels {
    mounted: Vec<PanelId>,
    open: Option<PanelId>,
}

impl Panels {
    pub fn with_mounted(mounted: &[PanelId]) -> Self {
        Self {
            mounted: mounted.to_vec(),
            open: None,
        }
    }

    pub fn is_mounted(&self, id: PanelId) -> bool {
        self.mounted.contains(&id)
    }

    /// Open `id`, closing whichever panel was open. Returns false (no-op)
    /// when the panel is not on the page.
    pub fn open(&mut self, id: PanelId) -> bool {
        if !self.is_mounted(id) {
            return false;
        }
        self.open = Some(id);
        true
    }

    /// Close `id`. Returns false when it was not open.
    pub fn close(&mut self, id: PanelId) -> bool {
        if self.open == Some(id) {
            self.open = None;
            true
        } else {
            false
        }
    }

    pub fn close_all(&mut self) {
        self.open = None;
    }

    pub fn state(&self, id: PanelId) -> PanelState {
        if self.open == Some(id) {
            PanelState::Open
        } else {
            PanelState::Closed
        }
    }

    pub fn is_open(&self, id: PanelId) -> bool {
        self.state(id) == PanelState::Open
    }

    pub fn open_panel(&self) -> Option<PanelId> {
        self.open
    }

    pub fn overlay_visible(&self) -> bool {
        self.open.is_some()
    }

    pub fn scroll_locked(&self) -> bool {
        self.open.is_some()
    }

    /// Full class list for rendering panel `id`
    pub fn panel_class(&self, id: PanelId) -> String {
        match self.state(id) {
            PanelState::Open => format!(
                "{} active {} transition-transform duration-300 z-50",
                id.base_class(),
                id.open_transform()
            ),
            PanelState::Closed => format!(
                "{} {} transition-transform duration-300 z-50",
                id.base_class(),
                id.closed_transform()
            ),
        }
    }

    pub fn overlay_class(&self) -> &'static str {
        if self.overlay_visible() {
            "overlay fixed inset-0 bg-black/50 z-40"
        } else {
            "overlay fixed inset-0 bg-black/50 z-40 hidden"
        }
    }
}
