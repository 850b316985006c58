#![allow(warnings)]
//! Storefront Frontend Entry Point

mod app;
mod bootstrap;
mod cart;
mod commands;
mod components;
mod config;
mod context;
mod csrf;
mod dashboard;
mod error;
mod models;
mod panel;
mod search;
mod selection;
mod store;
mod tabs;
mod timers;
mod toast;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = bootstrap::start() {
        web_sys::console::error_1(&format!("[BOOT] Storefront UI not started: {}", err).into());
    }
}
