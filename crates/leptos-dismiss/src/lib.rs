//! Leptos Dismiss Utilities
//!
//! Document-level listeners for closing popovers: outside clicks and the
//! Escape key. Listeners live for the lifetime of the page.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Key that dismisses open overlays
pub const ESCAPE_KEY: &str = "Escape";

/// Check whether `target` is `el` or one of its descendants.
///
/// A missing element (not mounted yet, or already removed) never contains
/// anything.
pub fn contains<T: AsRef<web_sys::Node>>(el: Option<T>, target: &web_sys::Node) -> bool {
    el.map(|el| el.as_ref().contains(Some(target))).unwrap_or(false)
}

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|win| win.document())
}

/// Bind a document click handler that calls `on_outside` whenever the click
/// target is not inside the region described by `is_inside`.
pub fn bind_outside_click<I, F>(is_inside: I, on_outside: F)
where
    I: Fn(&web_sys::Node) -> bool + 'static,
    F: Fn() + 'static,
{
    let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        match target {
            Some(node) if is_inside(&node) => {}
            // Targets detached by a re-render count as outside
            _ => on_outside(),
        }
    });

    if let Some(doc) = document() {
        let _ = doc.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    }
    on_click.forget();
}

/// Outside-click binding that simply resets an open flag.
pub fn close_on_outside_click<I>(set_open: WriteSignal<bool>, is_inside: I)
where
    I: Fn(&web_sys::Node) -> bool + 'static,
{
    bind_outside_click(is_inside, move || set_open.set(false));
}

/// Bind a document keydown handler for the Escape key.
pub fn bind_escape<F>(on_escape: F)
where
    F: Fn() + 'static,
{
    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() == ESCAPE_KEY {
            on_escape();
        }
    });

    if let Some(doc) = document() {
        let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    }
    on_keydown.forget();
}
