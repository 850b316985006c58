//! Product Grid Component
//!
//! Catalog cards supplied by the page config.

use leptos::prelude::*;

use crate::cart::format_money;
use crate::components::AddToCartButton;
use crate::models::Product;

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let url = product.detail_url();
    let alt = product.title.clone();

    view! {
        <article class="product-card flex flex-col rounded-lg bg-white shadow hover:shadow-lg transition-shadow">
            <a href=url.clone() class="block aspect-square overflow-hidden rounded-t-lg bg-gray-100">
                {product.image.map(|src| view! {
                    <img src=src alt=alt class="h-full w-full object-contain" loading="lazy" />
                })}
            </a>
            <div class="flex flex-1 flex-col gap-2 p-4">
                <a href=url class="line-clamp-2 font-medium hover:text-accent-500">{product.title}</a>
                <p class="mt-auto text-lg font-semibold">{format!("${}", format_money(product.price))}</p>
                <AddToCartButton product_id=product.id />
            </div>
        </article>
    }
}

#[component]
pub fn ProductGrid(products: Vec<Product>) -> impl IntoView {
    if products.is_empty() {
        return view! {
            <p class="py-16 text-center text-gray-500">"No hay productos para mostrar"</p>
        }
        .into_any();
    }

    view! {
        <div class="product-grid grid grid-cols-2 gap-4 md:grid-cols-3 lg:grid-cols-4">
            {products.into_iter().map(|product| view! { <ProductCard product=product /> }).collect_view()}
        </div>
    }
    .into_any()
}
