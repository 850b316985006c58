//! Dashboard App
//!
//! Admin page: tabs for catalog sync, sync history and maintenance.

use leptos::prelude::*;

use crate::components::{ConfirmReset, HistoryPagination, SyncProducts, TabBar, TabPane, ToastView, UserMenu};
use crate::config::PageConfig;
use crate::context::AppContext;
use crate::tabs::{Tab, TabSet};

fn dashboard_tabs() -> TabSet {
    TabSet::new(vec![
        Tab { id: "sync", label: "Sincronizar" },
        Tab { id: "history", label: "Historial" },
        Tab { id: "reset", label: "Mantenimiento" },
    ])
}

#[component]
pub fn DashboardApp(config: PageConfig) -> impl IntoView {
    let user_name = config.user_name.clone().unwrap_or_default();
    let history_pages = config.history_pages;

    provide_context(AppContext::new(config));
    let tabs = RwSignal::new(dashboard_tabs());

    view! {
        <div class="dashboard min-h-screen bg-gray-900 text-gray-100">
            <header class="flex items-center justify-between border-b border-gray-800 px-6 py-4">
                <h1 class="text-xl font-semibold">"Panel de administración"</h1>
                <UserMenu user_name=user_name />
            </header>

            <main class="mx-auto max-w-5xl p-6">
                <TabBar tabs=tabs />
                <TabPane tabs=tabs id="sync">
                    <SyncProducts />
                </TabPane>
                <TabPane tabs=tabs id="history">
                    <HistoryPagination pages=history_pages />
                </TabPane>
                <TabPane tabs=tabs id="reset">
                    <ConfirmReset />
                </TabPane>
            </main>

            <ToastView />
        </div>
    }
}
