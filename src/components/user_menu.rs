//! User Menu Component
//!
//! Header dropdown with account links. Closes on any click outside the
//! toggle button and the dropdown.

use leptos::prelude::*;
use leptos_dismiss::{close_on_outside_click, contains};

/// Account dropdown; an empty `user_name` renders the anonymous menu
#[component]
pub fn UserMenu(#[prop(into)] user_name: String) -> impl IntoView {
    let (open, set_open) = signal(false);
    let button_ref = NodeRef::<leptos::html::Button>::new();
    let dropdown_ref = NodeRef::<leptos::html::Div>::new();

    close_on_outside_click(set_open, move |target| {
        contains(button_ref.get_untracked(), target) || contains(dropdown_ref.get_untracked(), target)
    });

    let logged_in = !user_name.is_empty();
    let label = if logged_in { user_name } else { "Mi cuenta".to_string() };

    let links = if logged_in {
        view! {
            <a href="/account/profile/" class="block px-4 py-2 hover:bg-gray-100">"Mi perfil"</a>
            <a href="/dashboard/" class="block px-4 py-2 hover:bg-gray-100">"Panel"</a>
            <a href="/logout/" class="block px-4 py-2 hover:bg-gray-100">"Cerrar sesión"</a>
        }
        .into_any()
    } else {
        view! {
            <a href="/login/" class="block px-4 py-2 hover:bg-gray-100">"Iniciar sesión"</a>
        }
        .into_any()
    };

    view! {
        <div class="user-menu relative">
            <button
                id="user-menu-btn"
                type="button"
                class="flex items-center gap-2"
                node_ref=button_ref
                aria-haspopup="true"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                <i class="fas fa-user-circle"></i>
                <span class="hidden sm:inline">{label}</span>
            </button>
            <div
                id="user-dropdown"
                node_ref=dropdown_ref
                class=move || {
                    if open.get() {
                        "user-dropdown active absolute right-0 mt-2 w-48 rounded bg-white text-gray-800 shadow-lg z-50"
                    } else {
                        "user-dropdown hidden"
                    }
                }
            >
                {links}
            </div>
        </div>
    }
}
