//! Toast Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::StorefrontStateStoreFields;

/// Renders the toast slot from the store
#[component]
pub fn ToastView() -> impl IntoView {
    let store = use_app_context().store;

    view! {
        <div
            id="toast"
            role="status"
            aria-live="polite"
            class=move || store.toast().with(|t| t.class())
        >
            {move || store.toast().with(|t| {
                t.current().map(|toast| {
                    let icon = toast.kind.icon_class();
                    let message = toast.message.clone();
                    view! {
                        <i class=icon></i>
                        <span class="ml-2">{message}</span>
                    }
                })
            })}
        </div>
    }
}
