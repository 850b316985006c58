//! Filter Form Component
//!
//! Category and brand checkboxes for the filter panel. Submits a plain GET
//! to the catalog so filtering stays server-side.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::FilterOption;

#[component]
fn FilterGroup(title: &'static str, name: &'static str, options: Vec<FilterOption>) -> impl IntoView {
    view! {
        <fieldset class="space-y-2">
            <legend class="mb-2 font-semibold">{title}</legend>
            {options.into_iter().map(|option| view! {
                <label class="flex items-center gap-2">
                    <input type="checkbox" name=name value=option.id.to_string() checked=option.selected />
                    <span>{option.name}</span>
                </label>
            }).collect_view()}
        </fieldset>
    }
}

#[component]
pub fn FilterForm() -> impl IntoView {
    let ctx = use_app_context();
    let (catalog_url, filters) = ctx.with_config(|c| (c.catalog_url.clone(), c.filters.clone()));
    let form_action = catalog_url.clone();

    view! {
        <form method="get" action=form_action class="filter-form space-y-6">
            <FilterGroup title="Categorías" name="categoria" options=filters.categories />
            <FilterGroup title="Marcas" name="marca" options=filters.brands />
            <div class="flex gap-2">
                <button type="submit" class="flex-1 rounded bg-accent-500 py-2 text-white">"Aplicar filtros"</button>
                <a href=catalog_url class="flex-1 rounded border border-gray-300 py-2 text-center">"Limpiar"</a>
            </div>
        </form>
    }
}
