//! Sync Products Component
//!
//! Product checklist with "select all"; the sync button is disabled while
//! nothing is selected.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::csrf::{self, CSRF_FIELD};
use crate::selection::SyncSelection;
use crate::toast::ToastKind;

#[component]
pub fn SyncProducts() -> impl IntoView {
    let ctx = use_app_context();
    let (sync_url, page_token, products) =
        ctx.with_config(|c| (c.sync_url.clone(), c.csrf_token.clone(), c.sync_products.clone()));
    let token = csrf::current_token(page_token.as_deref()).unwrap_or_default();
    let selection = RwSignal::new(SyncSelection::new(products.iter().map(|p| p.id)));

    if products.is_empty() {
        return view! {
            <p class="text-gray-400">"No hay productos pendientes de sincronizar"</p>
        }
        .into_any();
    }

    let on_submit = move |ev: web_sys::SubmitEvent| {
        let selected = selection.with_untracked(|s| s.selected());
        if selected.is_empty() {
            ev.prevent_default();
            ctx.notify(ToastKind::Error, "Selecciona al menos un producto");
            return;
        }
        log::info!("[SYNC] Submitting {} products: {:?}", selected.len(), selected);
    };

    view! {
        <form method="post" action=sync_url class="space-y-4" on:submit=on_submit>
            <input type="hidden" name=CSRF_FIELD value=token />
            <label class="flex items-center gap-2 font-semibold">
                <input
                    id="select-all"
                    type="checkbox"
                    prop:checked=move || selection.with(|s| s.all_selected())
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        selection.update(|s| s.select_all(checked));
                    }
                />
                <span>"Seleccionar todos"</span>
            </label>
            <ul class="divide-y divide-gray-800">
                {products.into_iter().map(|product| {
                    let id = product.id;
                    view! {
                        <li class="py-2">
                            <label class="flex items-center gap-2">
                                <input
                                    type="checkbox"
                                    class="product-check"
                                    name="product_ids"
                                    value=id.to_string()
                                    prop:checked=move || selection.with(|s| s.is_selected(id))
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        selection.update(|s| s.set(id, checked));
                                    }
                                />
                                <span>{product.title}</span>
                            </label>
                        </li>
                    }
                }).collect_view()}
            </ul>
            <button
                id="sync-btn"
                type="submit"
                class="rounded bg-accent-500 px-4 py-2 text-white disabled:opacity-50"
                disabled=move || !selection.with(|s| s.can_sync())
            >
                {move || format!("Sincronizar ({})", selection.with(|s| s.selected().len()))}
            </button>
        </form>
    }
    .into_any()
}
