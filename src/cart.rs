//! Cart View Logic
//!
//! Badge styling, money formatting and the add-to-cart button state,
//! all derived from the latest server snapshot.

use crate::models::{CartLine, CartSnapshot};

pub const EMPTY_CART_MESSAGE: &str = "Tu carrito está vacío";

const BADGE_BASE: &str = "cart-badge absolute -top-2 -right-2 rounded-full text-xs text-white px-1.5";
const BADGE_NON_EMPTY: &str = "bg-accent-500";
const BADGE_EMPTY: &str = "bg-gray-500";

/// Color class for the header badge
pub fn badge_color(count: u32) -> &'static str {
    if count > 0 {
        BADGE_NON_EMPTY
    } else {
        BADGE_EMPTY
    }
}

pub fn badge_class(count: u32) -> String {
    format!("{} {}", BADGE_BASE, badge_color(count))
}

/// Two-decimal display for prices and totals
pub fn format_money(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// What the sidebar item list shows
#[derive(Debug, Clone, PartialEq)]
pub enum CartListView {
    Empty(&'static str),
    Lines(Vec<CartLine>),
}

pub fn list_view(snapshot: &CartSnapshot) -> CartListView {
    if snapshot.items.is_empty() {
        CartListView::Empty(EMPTY_CART_MESSAGE)
    } else {
        CartListView::Lines(snapshot.items.clone())
    }
}

pub fn total_label(snapshot: &CartSnapshot) -> String {
    format_money(snapshot.grand_total)
}

/// State of one add-to-cart control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddButtonState {
    #[default]
    Idle,
    Pending,
}

impl AddButtonState {
    pub fn is_disabled(&self) -> bool {
        *self == AddButtonState::Pending
    }

    pub fn label(&self) -> &'static str {
        match self {
            AddButtonState::Idle => "Agregar",
            AddButtonState::Pending => "Agregando...",
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            AddButtonState::Idle => "fas fa-cart-plus",
            AddButtonState::Pending => "fas fa-spinner fa-spin",
        }
    }
}

/// Restores a control when dropped.
///
/// Held across the awaited request so the control is restored on every
/// exit path, including an early return or a dropped future.
pub struct PendingGuard {
    restore: Option<Box<dyn FnOnce()>>,
}

impl PendingGuard {
    pub fn new(restore: impl FnOnce() + 'static) -> Self {
        Self {
            restore: Some(Box::new(restore)),
        }
    }
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        if let Some(restore) = self.restore.take() {
            restore();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn line(title: &str, qty: u32, price: f64) -> CartLine {
        CartLine {
            title: title.to_string(),
            image: None,
            price,
            qty,
            total: price * qty as f64,
        }
    }

    #[test]
    fn test_badge_color() {
        let snapshot = CartSnapshot {
            count: 3,
            items: vec![line("Martillo", 3, 150.0)],
            grand_total: 450.0,
        };
        assert_eq!(snapshot.count.to_string(), "3");
        assert!(badge_class(snapshot.count).ends_with(BADGE_NON_EMPTY));
        assert!(badge_class(0).ends_with(BADGE_EMPTY));
        assert_eq!(badge_color(1), BADGE_NON_EMPTY);
    }

    #[test]
    fn test_cleared_cart_renders_empty_state() {
        let cleared = CartSnapshot::empty();
        assert_eq!(list_view(&cleared), CartListView::Empty(EMPTY_CART_MESSAGE));
        assert_eq!(total_label(&cleared), "0.00");
        assert!(badge_class(cleared.count).ends_with(BADGE_EMPTY));
    }

    #[test]
    fn test_lines_view() {
        let snapshot = CartSnapshot {
            count: 2,
            items: vec![line("Pinza", 1, 89.0), line("Cinta", 1, 25.5)],
            grand_total: 114.5,
        };
        match list_view(&snapshot) {
            CartListView::Lines(lines) => assert_eq!(lines.len(), 2),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(total_label(&snapshot), "114.50");
    }

    #[test]
    fn test_format_money_rounds() {
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(12.346), "12.35");
        assert_eq!(format_money(1200.0), "1200.00");
    }

    #[test]
    fn test_button_state() {
        assert!(!AddButtonState::Idle.is_disabled());
        assert!(AddButtonState::Pending.is_disabled());
        assert_ne!(AddButtonState::Idle.label(), AddButtonState::Pending.label());
    }

    #[test]
    fn test_guard_restores_on_success_and_failure() {
        for outcome in [Ok(()), Err("boom")] {
            let state = Rc::new(Cell::new(AddButtonState::Pending));
            let restored = state.clone();
            let run = || -> Result<(), &'static str> {
                let _guard = PendingGuard::new(move || restored.set(AddButtonState::Idle));
                outcome?;
                Ok(())
            };
            let _ = run();
            assert_eq!(state.get(), AddButtonState::Idle);
        }
    }

    #[test]
    fn test_guard_restores_on_panic() {
        let state = Rc::new(Cell::new(AddButtonState::Pending));
        let restored = state.clone();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _guard = PendingGuard::new(move || restored.set(AddButtonState::Idle));
            panic!("handler failed");
        }));
        assert!(result.is_err());
        assert_eq!(state.get(), AddButtonState::Idle);
    }
}
