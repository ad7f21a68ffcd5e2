//! View models
//!
//! Pre-computed presentation data. Views only lay these out.

mod cart_view_model;
mod product_list_view_model;
mod tabs_view_model;

pub use cart_view_model::CartViewModel;
pub use product_list_view_model::{ProductListViewModel, ProductRowViewModel};
pub use tabs_view_model::{TabViewModel, TabsViewModel};

/// Everything one variant shows below the tab bar
#[derive(Debug, Clone, PartialEq)]
pub struct ShopViewModel {
    /// How this variant manages its state
    pub description: &'static str,
    pub cart: CartViewModel,
    pub product_list: ProductListViewModel,
}

/// The whole screen
#[derive(Debug, Clone, PartialEq)]
pub struct AppViewModel {
    pub tabs: TabsViewModel,
    pub shop: ShopViewModel,
}
