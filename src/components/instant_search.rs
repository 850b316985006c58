//! Instant Search Component
//!
//! Query-as-you-type box with a dropdown of matches. Keystrokes restart a
//! debounce timer; only the newest request may update the dropdown.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dismiss::{bind_outside_click, contains};

use crate::commands;
use crate::components::SearchResultList;
use crate::context::use_app_context;
use crate::search::{InputAction, SearchState, DEBOUNCE_MS};
use crate::timers::TimerSlot;

#[component]
pub fn InstantSearch(#[prop(optional)] autofocus: bool) -> impl IntoView {
    let ctx = use_app_context();
    let search = RwSignal::new(SearchState::default());
    let debounce = TimerSlot::new();
    let container = NodeRef::<leptos::html::Div>::new();
    let catalog_url = ctx.with_config(|c| c.catalog_url.clone());

    bind_outside_click(
        move |target| contains(container.get_untracked(), target),
        move || search.update(|s| s.hide()),
    );

    let run_query = move |seq: u64, term: String| {
        spawn_local(async move {
            let config = ctx.config();
            let result = commands::instant_search(&config, &term).await;
            if let Err(err) = &result {
                log::error!("[SEARCH] '{}' failed: {}", term, err);
            }

            let mut applied = false;
            search.update(|s| applied = s.on_response(seq, result));
            if !applied {
                log::debug!("[SEARCH] Dropped stale response #{} for '{}'", seq, term);
            }
        });
    };

    let on_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        let mut action = InputAction::ClearNow;
        search.update(|s| action = s.on_input(&value));

        match action {
            InputAction::ClearNow => debounce.cancel(),
            InputAction::Schedule { generation, term } => {
                debounce.schedule(DEBOUNCE_MS, move || {
                    let mut seq = None;
                    search.update(|s| seq = s.on_timer(generation));
                    if let Some(seq) = seq {
                        run_query(seq, term);
                    }
                });
            }
        }
    };

    view! {
        <div class="instant-search relative w-full" node_ref=container>
            <form method="get" action=catalog_url role="search">
                <input
                    type="search"
                    name="q"
                    autocomplete="off"
                    autofocus=autofocus
                    placeholder="Buscar productos..."
                    class="w-full rounded-full border border-gray-300 px-4 py-2 focus:border-accent-500 focus:outline-none"
                    on:input=on_input
                    on:focus=move |_| search.update(|s| s.reveal())
                />
            </form>
            <SearchResultList search=search />
        </div>
    }
}
