//! Toast Notifications
//!
//! One toast at a time. Each `show` starts a new generation so that the
//! auto-hide scheduled by an older toast cannot hide a newer one.

/// How long a toast stays visible
pub const TOAST_MS: u32 = 2500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn color_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "bg-green-600",
            ToastKind::Error => "bg-red-600",
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "fas fa-check-circle",
            ToastKind::Error => "fas fa-exclamation-circle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    current: Option<Toast>,
    generation: u64,
}

impl ToastState {
    /// Show a toast; returns the generation its auto-hide must present
    pub fn show(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.generation += 1;
        self.current = Some(Toast {
            kind,
            message: message.into(),
        });
        self.generation
    }

    /// Hide if `generation` still identifies the visible toast
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation == self.generation && self.current.is_some() {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn class(&self) -> String {
        match &self.current {
            Some(toast) => format!(
                "toast fixed bottom-4 right-4 z-50 rounded px-4 py-3 text-white shadow-lg {}",
                toast.kind.color_class()
            ),
            None => "toast fixed bottom-4 right-4 z-50 hidden".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_then_expire() {
        let mut state = ToastState::default();
        let generation = state.show(ToastKind::Success, "Producto agregado");
        assert_eq!(state.current().map(|t| t.kind), Some(ToastKind::Success));
        assert!(state.expire(generation));
        assert!(state.current().is_none());
        assert!(state.class().ends_with("hidden"));
    }

    #[test]
    fn test_older_timer_does_not_hide_newer_toast() {
        let mut state = ToastState::default();
        let first = state.show(ToastKind::Success, "uno");
        let second = state.show(ToastKind::Error, "dos");

        assert!(!state.expire(first));
        assert_eq!(state.current().map(|t| t.message.as_str()), Some("dos"));
        assert!(state.expire(second));
    }

    #[test]
    fn test_error_toast_is_red() {
        let mut state = ToastState::default();
        state.show(ToastKind::Error, "fallo");
        assert!(state.class().contains("bg-red-600"));
        assert!(!state.class().contains("hidden"));
    }

    #[test]
    fn test_expire_twice_is_noop() {
        let mut state = ToastState::default();
        let generation = state.show(ToastKind::Success, "ok");
        assert!(state.expire(generation));
        assert!(!state.expire(generation));
    }
}
