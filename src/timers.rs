//! Timer Slots
//!
//! A slot holds at most one pending `gloo_timers` timeout. Scheduling into
//! an occupied slot drops (and thereby cancels) the previous timeout.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct TimerSlot(StoredValue<Option<Timeout>, LocalStorage>);

impl TimerSlot {
    pub fn new() -> Self {
        Self(StoredValue::new_local(None))
    }

    pub fn schedule(&self, millis: u32, callback: impl FnOnce() + 'static) {
        let timeout = Timeout::new(millis, callback);
        self.0.set_value(Some(timeout));
    }

    pub fn cancel(&self) {
        self.0.update_value(|pending| {
            pending.take();
        });
    }
}

impl Default for TimerSlot {
    fn default() -> Self {
        Self::new()
    }
}
