//! Page Bootstrap
//!
//! Resolves the page config and the mount element once per page load, then
//! mounts the matching app. Missing pieces are reported, not skipped.

use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::app::StorefrontApp;
use crate::config::{PageConfig, PageKind, CONFIG_GLOBAL};
use crate::dashboard::DashboardApp;
use crate::error::MountError;

pub fn start() -> Result<(), MountError> {
    let window = web_sys::window().ok_or(MountError::MissingWindow)?;

    let loaded = PageConfig::from_window(&window);
    let level = match &loaded {
        Ok(Some(config)) => config.log_level(),
        _ => log::Level::Info,
    };
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"[BOOT] Logger already initialized".into());
    }

    let config = match loaded? {
        Some(config) => config,
        None => {
            log::warn!("[BOOT] window.{} is not set, using defaults", CONFIG_GLOBAL);
            PageConfig::default()
        }
    };

    let root = window
        .document()
        .and_then(|doc| doc.get_element_by_id(&config.mount_id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .ok_or_else(|| MountError::MissingElement(config.mount_id.clone()))?;

    log::info!("[BOOT] Mounting {:?} app into #{}", config.page, config.mount_id);
    match config.page {
        PageKind::Storefront => mount_to(root, move || view! { <StorefrontApp config=config /> }).forget(),
        PageKind::Dashboard => mount_to(root, move || view! { <DashboardApp config=config /> }).forget(),
    }
    Ok(())
}
