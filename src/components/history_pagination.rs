//! History Pagination Component

use leptos::prelude::*;

/// Page links for the sync history; clicks stay on the page
#[component]
pub fn HistoryPagination(pages: u32) -> impl IntoView {
    let (current, set_current) = signal(1u32);

    view! {
        <nav class="history-pagination flex gap-1" aria-label="Historial">
            {(1..=pages.max(1)).map(|page| view! {
                <a
                    href=format!("?page={}", page)
                    data-page=page.to_string()
                    class=move || {
                        if current.get() == page {
                            "rounded bg-accent-500 px-3 py-1 text-white"
                        } else {
                            "rounded px-3 py-1 text-gray-400 hover:text-white"
                        }
                    }
                    on:click=move |ev: web_sys::MouseEvent| {
                        ev.prevent_default();
                        set_current.set(page);
                        log::info!("[HISTORY] Loading page {}", page);
                    }
                >
                    {page}
                </a>
            }).collect_view()}
        </nav>
    }
}
