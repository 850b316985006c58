//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::PageConfig;
use crate::models::CartSnapshot;
use crate::panel::{PanelId, Panels};
use crate::toast::{ToastKind, ToastState};

/// Page-wide state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct StorefrontState {
    /// Latest cart snapshot from the server
    pub cart: CartSnapshot,
    /// Slide-in panels and the derived overlay
    pub panels: Panels,
    /// The single toast slot
    pub toast: ToastState,
}

impl StorefrontState {
    pub fn new(config: &PageConfig) -> Self {
        Self {
            cart: config.initial_cart.clone(),
            panels: Panels::with_mounted(&config.panels),
            toast: ToastState::default(),
        }
    }
}

/// Type alias for the store
pub type StorefrontStore = Store<StorefrontState>;

// ========================
// Store Helper Functions
// ========================

/// Replace the cart with a fresh server snapshot
pub fn store_apply_cart(store: &StorefrontStore, snapshot: CartSnapshot) {
    store.cart().set(snapshot);
}

/// Reset the cart to empty after a successful clear
pub fn store_clear_cart(store: &StorefrontStore) {
    store.cart().set(CartSnapshot::empty());
}

pub fn store_open_panel(store: &StorefrontStore, id: PanelId) -> bool {
    let mut opened = false;
    store.panels().update(|panels| opened = panels.open(id));
    opened
}

pub fn store_close_panel(store: &StorefrontStore, id: PanelId) -> bool {
    let mut closed = false;
    store.panels().update(|panels| closed = panels.close(id));
    closed
}

pub fn store_close_all_panels(store: &StorefrontStore) {
    store.panels().update(|panels| panels.close_all());
}

/// Show a toast and return the generation its auto-hide must match
pub fn store_show_toast(store: &StorefrontStore, kind: ToastKind, message: String) -> u64 {
    let mut generation = 0;
    store.toast().update(|toast| generation = toast.show(kind, message));
    generation
}

pub fn store_expire_toast(store: &StorefrontStore, generation: u64) {
    store.toast().update(|toast| {
        toast.expire(generation);
    });
}
