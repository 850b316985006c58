//! UI Components
//!
//! Reusable Leptos components.

mod add_to_cart_button;
mod cart_sidebar;
mod confirm_reset;
mod filter_form;
mod history_pagination;
mod instant_search;
mod product_grid;
mod search_result_list;
mod site_header;
mod slide_panel;
mod sync_products;
mod tab_bar;
mod toast_view;
mod user_menu;

pub use add_to_cart_button::AddToCartButton;
pub use cart_sidebar::{CartSidebar, CartToggle};
pub use confirm_reset::ConfirmReset;
pub use filter_form::FilterForm;
pub use history_pagination::HistoryPagination;
pub use instant_search::InstantSearch;
pub use product_grid::ProductGrid;
pub use search_result_list::SearchResultList;
pub use site_header::SiteHeader;
pub use slide_panel::{bind_scroll_lock, Overlay, SlidePanel};
pub use sync_products::SyncProducts;
pub use tab_bar::{TabBar, TabPane};
pub use toast_view::ToastView;
pub use user_menu::UserMenu;
