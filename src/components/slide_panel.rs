//! Slide Panel Components
//!
//! Slide-in panels, the shared overlay, and the body scroll lock. All three
//! render from the panel state in the store.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::panel::PanelId;
use crate::store::{StorefrontStateStoreFields, StorefrontStore};

/// A slide-in panel with a header and close button
#[component]
pub fn SlidePanel(
    id: PanelId,
    #[prop(into)] title: String,
    children: Children,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    view! {
        <aside
            id=id.dom_id()
            class=move || store.panels().with(|panels| panels.panel_class(id))
            aria-hidden=move || (!store.panels().with(|panels| panels.is_open(id))).to_string()
        >
            <div class="panel-header flex items-center justify-between p-4 border-b border-gray-200">
                <h2 class="text-lg font-semibold">{title}</h2>
                <button
                    type="button"
                    class="panel-close text-2xl leading-none"
                    aria-label="Cerrar"
                    on:click=move |_| ctx.close_panel(id)
                >
                    "×"
                </button>
            </div>
            <div class="panel-body h-full overflow-y-auto p-4">
                {children()}
            </div>
        </aside>
    }
}

/// Full-screen backdrop; a click closes every panel
#[component]
pub fn Overlay() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    view! {
        <div
            id="overlay"
            class=move || store.panels().with(|panels| panels.overlay_class())
            on:click=move |_| ctx.close_all_panels()
        ></div>
    }
}

/// Keep `overflow-hidden` on `<body>` in sync with the panel state
pub fn bind_scroll_lock(store: StorefrontStore) {
    Effect::new(move |_| {
        let locked = store.panels().with(|panels| panels.scroll_locked());
        let body = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.body());
        if let Some(body) = body {
            let classes = body.class_list();
            let _ = if locked {
                classes.add_1("overflow-hidden")
            } else {
                classes.remove_1("overflow-hidden")
            };
        }
    });
}
