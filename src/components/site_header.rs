//! Site Header Component
//!
//! Logo, desktop search, panel toggles and the user menu.

use leptos::prelude::*;

use crate::components::{CartToggle, InstantSearch, UserMenu};
use crate::context::use_app_context;
use crate::panel::PanelId;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let ctx = use_app_context();
    let (panels, user_name) = ctx.with_config(|c| (c.panels.clone(), c.user_name.clone().unwrap_or_default()));
    let has = |id: PanelId| panels.contains(&id);

    view! {
        <header class="site-header sticky top-0 z-30 bg-gray-900 text-white shadow">
            <div class="container mx-auto flex items-center gap-4 px-4 py-3">
                <a href="/" class="text-xl font-bold whitespace-nowrap">"Catálogo"</a>
                <div class="hidden flex-1 md:block">
                    <InstantSearch />
                </div>
                <div class="ml-auto flex items-center gap-4">
                    {has(PanelId::Search).then(move || view! {
                        <button
                            id="search-toggle"
                            type="button"
                            class="md:hidden"
                            aria-label="Buscar"
                            on:click=move |_| ctx.open_panel(PanelId::Search)
                        >
                            <i class="fas fa-search text-xl"></i>
                        </button>
                    })}
                    {has(PanelId::Filter).then(move || view! {
                        <button
                            id="filter-toggle"
                            type="button"
                            aria-label="Filtros"
                            on:click=move |_| ctx.open_panel(PanelId::Filter)
                        >
                            <i class="fas fa-sliders-h text-xl"></i>
                        </button>
                    })}
                    {has(PanelId::Cart).then(move || view! { <CartToggle /> })}
                    <UserMenu user_name=user_name />
                </div>
            </div>
        </header>
    }
}
