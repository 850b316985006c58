//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::PageConfig;
use crate::models::CartSnapshot;
use crate::panel::PanelId;
use crate::store::{self, StorefrontState, StorefrontStore};
use crate::timers::TimerSlot;
use crate::toast::{ToastKind, TOAST_MS};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Reactive page state
    pub store: StorefrontStore,
    /// Server-injected configuration
    config: StoredValue<PageConfig>,
    /// Pending auto-hide of the toast
    toast_timer: TimerSlot,
}

impl AppContext {
    pub fn new(config: PageConfig) -> Self {
        Self {
            store: StorefrontStore::new(StorefrontState::new(&config)),
            config: StoredValue::new(config),
            toast_timer: TimerSlot::new(),
        }
    }

    pub fn config(&self) -> PageConfig {
        self.config.get_value()
    }

    pub fn with_config<U>(&self, f: impl FnOnce(&PageConfig) -> U) -> U {
        self.config.with_value(f)
    }

    /// Show a toast that hides itself after `TOAST_MS`
    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        let generation = store::store_show_toast(&self.store, kind, message.into());
        let store = self.store;
        self.toast_timer.schedule(TOAST_MS, move || {
            store::store_expire_toast(&store, generation);
        });
    }

    pub fn apply_cart(&self, snapshot: CartSnapshot) {
        store::store_apply_cart(&self.store, snapshot);
    }

    pub fn clear_cart(&self) {
        store::store_clear_cart(&self.store);
    }

    pub fn open_panel(&self, id: PanelId) {
        if !store::store_open_panel(&self.store, id) {
            log::debug!("[PANEL] {:?} is not on this page", id);
        }
    }

    pub fn close_panel(&self, id: PanelId) {
        store::store_close_panel(&self.store, id);
    }

    pub fn close_all_panels(&self) {
        store::store_close_all_panels(&self.store);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
