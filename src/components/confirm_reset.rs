//! Confirm Reset Component
//!
//! Full-reset form whose submit button stays disabled until the
//! confirmation box is checked.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::csrf::{self, CSRF_FIELD};
use crate::selection::ConfirmGate;
use crate::toast::ToastKind;

#[component]
pub fn ConfirmReset() -> impl IntoView {
    let ctx = use_app_context();
    let gate = RwSignal::new(ConfirmGate::default());
    let (reset_url, page_token) = ctx.with_config(|c| (c.reset_url.clone(), c.csrf_token.clone()));
    let token = csrf::current_token(page_token.as_deref()).unwrap_or_default();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        if gate.with_untracked(|g| g.button_disabled()) {
            ev.prevent_default();
            ctx.notify(ToastKind::Error, "Confirma el reset antes de continuar");
            return;
        }
        log::warn!("[RESET] Full reset submitted");
    };

    view! {
        <form method="post" action=reset_url class="space-y-4" on:submit=on_submit>
            <input type="hidden" name=CSRF_FIELD value=token />
            <p class="text-red-400">
                "Esta acción elimina todos los productos sincronizados y su historial."
            </p>
            <label class="flex items-center gap-2">
                <input
                    id="confirm-reset"
                    type="checkbox"
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        gate.update(|g| g.set_confirmed(checked));
                    }
                />
                <span>"Entiendo que esta acción no se puede deshacer"</span>
            </label>
            <button
                id="full-reset-btn"
                type="submit"
                class=move || format!("rounded bg-red-600 px-4 py-2 text-white {}", gate.with(|g| g.opacity_class()))
                disabled=move || gate.with(|g| g.button_disabled())
            >
                "Reset completo"
            </button>
        </form>
    }
}
