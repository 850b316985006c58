//! Add-to-Cart Button Component
//!
//! One control per product. The button is disabled and shows a spinner while
//! its request is in flight, and is restored on every outcome.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::cart::{AddButtonState, PendingGuard};
use crate::commands;
use crate::context::use_app_context;
use crate::toast::ToastKind;

#[component]
pub fn AddToCartButton(#[prop(into)] product_id: String) -> impl IntoView {
    let ctx = use_app_context();
    let (state, set_state) = signal(AddButtonState::Idle);
    let product_id = StoredValue::new(product_id);

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        if state.get_untracked().is_disabled() {
            return;
        }
        set_state.set(AddButtonState::Pending);

        let product_id = product_id.get_value();
        spawn_local(async move {
            let _guard = PendingGuard::new(move || set_state.set(AddButtonState::Idle));
            let config = ctx.config();

            match commands::add_to_cart(&config, &product_id).await {
                Ok(snapshot) => {
                    log::info!("[CART] Added {}, cart has {} items", product_id, snapshot.count);
                    ctx.apply_cart(snapshot);
                    ctx.notify(ToastKind::Success, "Producto agregado al carrito");
                }
                Err(err) => {
                    log::error!("[CART] Adding {} failed: {}", product_id, err);
                    ctx.notify(ToastKind::Error, err.user_message());
                }
            }
        });
    };

    let button_class = move || {
        if state.get().is_disabled() {
            "add-to-cart-btn flex items-center justify-center gap-2 w-full rounded bg-accent-500 px-3 py-2 text-white opacity-60 cursor-wait"
        } else {
            "add-to-cart-btn flex items-center justify-center gap-2 w-full rounded bg-accent-500 px-3 py-2 text-white hover:bg-accent-600"
        }
    };

    view! {
        <button
            type="button"
            class=button_class
            disabled=move || state.get().is_disabled()
            aria-busy=move || state.get().is_disabled().to_string()
            on:click=on_click
        >
            <i class=move || state.get().icon_class()></i>
            <span>{move || state.get().label()}</span>
        </button>
    }
}
