//! Tab Bar Components
//!
//! Buttons and panes driven by a shared `TabSet` signal.

use leptos::prelude::*;

use crate::tabs::TabSet;

#[component]
pub fn TabBar(tabs: RwSignal<TabSet>) -> impl IntoView {
    let entries = tabs.with_untracked(|t| t.tabs().to_vec());

    view! {
        <nav class="tab-bar mb-6 flex border-b border-gray-700">
            {entries.into_iter().map(|tab| {
                let id = tab.id;
                view! {
                    <button
                        type="button"
                        class=move || format!("{} border-b-2 px-4 py-2", tabs.with(|t| t.button_class(id)))
                        data-tab=id
                        on:click=move |_| tabs.update(|t| {
                            t.select(id);
                        })
                    >
                        {tab.label}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}

/// Pane shown only while its tab is active
#[component]
pub fn TabPane(tabs: RwSignal<TabSet>, id: &'static str, children: Children) -> impl IntoView {
    view! {
        <section id=id class=move || tabs.with(|t| t.pane_class(id))>
            {children()}
        </section>
    }
}
