//! Storefront App
//!
//! Catalog page: header, product grid, slide-in panels, overlay and toast.

use leptos::prelude::*;

use crate::components::{
    bind_scroll_lock, CartSidebar, FilterForm, InstantSearch, Overlay, ProductGrid, SiteHeader, SlidePanel,
    ToastView,
};
use crate::config::PageConfig;
use crate::context::AppContext;
use crate::panel::PanelId;

#[component]
pub fn StorefrontApp(config: PageConfig) -> impl IntoView {
    let has_cart = config.panels.contains(&PanelId::Cart);
    let has_filter = config.panels.contains(&PanelId::Filter);
    let has_search = config.panels.contains(&PanelId::Search);
    let products = config.products.clone();

    // Provide context to all children
    let ctx = AppContext::new(config);
    provide_context(ctx);

    bind_scroll_lock(ctx.store);
    leptos_dismiss::bind_escape(move || ctx.close_all_panels());

    view! {
        <div class="storefront min-h-screen bg-gray-50">
            <SiteHeader />

            <main class="container mx-auto px-4 py-6">
                <ProductGrid products=products />
            </main>

            {has_cart.then(|| view! {
                <SlidePanel id=PanelId::Cart title="Tu carrito">
                    <CartSidebar />
                </SlidePanel>
            })}
            {has_filter.then(|| view! {
                <SlidePanel id=PanelId::Filter title="Filtros">
                    <FilterForm />
                </SlidePanel>
            })}
            {has_search.then(|| view! {
                <SlidePanel id=PanelId::Search title="Buscar">
                    <InstantSearch autofocus=true />
                </SlidePanel>
            })}

            <Overlay />
            <ToastView />
        </div>
    }
}
