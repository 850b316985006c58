//! Search Result List Component
//!
//! Dropdown under the search box. Content and visibility are independent:
//! hiding keeps the last results.

use leptos::prelude::*;

use crate::search::{SearchState, SearchView, ERROR_MESSAGE, NO_RESULTS_MESSAGE, SEARCHING_MESSAGE};

#[component]
pub fn SearchResultList(search: RwSignal<SearchState>) -> impl IntoView {
    let list_class = move || {
        if search.with(|s| s.is_visible()) {
            "search-results absolute left-0 right-0 top-full mt-1 max-h-96 overflow-y-auto rounded bg-white text-gray-800 shadow-lg z-50"
        } else {
            "search-results hidden"
        }
    };

    view! {
        <div class=list_class>
            {move || search.with(|s| match s.view() {
                SearchView::Idle => view! { <div></div> }.into_any(),
                SearchView::Searching => view! {
                    <div class="search-status px-4 py-3 text-gray-500">
                        <i class="fas fa-spinner fa-spin mr-2"></i>
                        {SEARCHING_MESSAGE}
                    </div>
                }
                .into_any(),
                SearchView::NoResults => view! {
                    <div class="search-status px-4 py-3 text-gray-500">{NO_RESULTS_MESSAGE}</div>
                }
                .into_any(),
                SearchView::Failed => view! {
                    <div class="search-error px-4 py-3 text-red-600">{ERROR_MESSAGE}</div>
                }
                .into_any(),
                SearchView::Hits(hits) => view! {
                    <ul class="divide-y divide-gray-100">
                        {hits.iter().cloned().map(|hit| view! {
                            <li>
                                <a href=hit.url class="flex justify-between gap-4 px-4 py-2 hover:bg-gray-50">
                                    <span class="truncate">{hit.name}</span>
                                    <span class="whitespace-nowrap font-semibold">{hit.price}</span>
                                </a>
                            </li>
                        }).collect_view()}
                    </ul>
                }
                .into_any(),
            })}
        </div>
    }
}
