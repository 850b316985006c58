//! Cart Sidebar Component
//!
//! Contents of the cart panel, re-rendered from the latest snapshot.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::cart::{self, CartListView, PendingGuard};
use crate::commands;
use crate::context::use_app_context;
use crate::models::CartLine;
use crate::panel::PanelId;
use crate::store::StorefrontStateStoreFields;
use crate::toast::ToastKind;

#[component]
fn CartLineRow(line: CartLine) -> impl IntoView {
    let alt = line.title.clone();

    view! {
        <li class="cart-item flex gap-3 py-3">
            {line.image.map(|src| view! {
                <img src=src alt=alt class="h-16 w-16 rounded object-cover" />
            })}
            <div class="flex-1">
                <p class="font-medium">{line.title}</p>
                <p class="text-sm text-gray-500">
                    {format!("{} × ${}", line.qty, cart::format_money(line.price))}
                </p>
            </div>
            <p class="font-semibold">{format!("${}", cart::format_money(line.total))}</p>
        </li>
    }
}

/// Item list, total and clear action of the cart panel
#[component]
pub fn CartSidebar() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let (clearing, set_clearing) = signal(false);

    let clear = move |_| {
        if clearing.get_untracked() {
            return;
        }
        set_clearing.set(true);

        spawn_local(async move {
            let _guard = PendingGuard::new(move || set_clearing.set(false));
            let config = ctx.config();

            match commands::clear_cart(&config).await {
                Ok(_) => {
                    log::info!("[CART] Cleared");
                    ctx.clear_cart();
                }
                Err(err) => {
                    log::error!("[CART] Clearing failed: {}", err);
                    ctx.notify(ToastKind::Error, err.user_message());
                }
            }
        });
    };

    let is_empty = move || store.cart().with(|c| c.items.is_empty());

    view! {
        <div id="cart-items" class="cart-items">
            {move || match store.cart().with(cart::list_view) {
                CartListView::Empty(message) => view! {
                    <p class="cart-empty py-8 text-center text-gray-500">{message}</p>
                }
                .into_any(),
                CartListView::Lines(lines) => view! {
                    <ul class="divide-y divide-gray-200">
                        {lines.into_iter().map(|line| view! { <CartLineRow line=line /> }).collect_view()}
                    </ul>
                }
                .into_any(),
            }}
        </div>
        <div class="cart-footer mt-6 border-t border-gray-200 pt-4">
            <div class="flex justify-between text-lg font-semibold">
                <span>"Total"</span>
                <span>"$"<span id="cart-total">{move || store.cart().with(cart::total_label)}</span></span>
            </div>
            <a href="/canasta/" class="mt-4 block rounded bg-accent-500 py-2 text-center text-white">
                "Ver carrito"
            </a>
            <button
                type="button"
                class="mt-2 w-full rounded border border-gray-300 py-2 text-gray-600 disabled:opacity-50"
                disabled=move || is_empty() || clearing.get()
                on:click=clear
            >
                {move || if clearing.get() { "Vaciando..." } else { "Vaciar carrito" }}
            </button>
        </div>
    }
}

/// Header button that opens the cart panel, with the item-count badge
#[component]
pub fn CartToggle() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let count = move || store.cart().with(|c| c.count);

    view! {
        <button
            id="cart-toggle"
            type="button"
            class="relative"
            aria-label="Abrir carrito"
            on:click=move |_| ctx.open_panel(PanelId::Cart)
        >
            <i class="fas fa-shopping-cart text-xl"></i>
            <span id="cart-count" class=move || cart::badge_class(count())>{count}</span>
        </button>
    }
}
