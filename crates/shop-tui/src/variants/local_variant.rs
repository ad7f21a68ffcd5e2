//! Local state variant
//!
//! Products and cart live in the variant itself. Adding to the cart
//! mutates the state and the next draw shows it.

use super::{Tab, Variant};
use crate::catalog::{CatalogSource, ProductLoader};
use crate::input::Command;
use crate::state::{LocalShopState, ProductListState};
use crate::view_models::{CartViewModel, ProductListViewModel, ShopViewModel};

pub struct LocalStateVariant {
    state: LocalShopState,
    loader: ProductLoader,
    cursor: ProductListState,
}

impl LocalStateVariant {
    pub fn new(source: CatalogSource) -> Self {
        Self {
            state: LocalShopState::default(),
            loader: ProductLoader::new(source),
            cursor: ProductListState::default(),
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &LocalShopState {
        &self.state
    }
}

impl Variant for LocalStateVariant {
    fn tab(&self) -> Tab {
        Tab::State
    }

    fn mount(&mut self) {
        self.loader.start();
    }

    fn poll(&mut self) -> bool {
        let loading = self.loader.is_loading();
        if let Some(products) = self.loader.poll() {
            self.state.set_products(products);
        }
        loading && !self.loader.is_loading()
    }

    fn handle(&mut self, command: Command) {
        let len = self.state.products.len();
        match command {
            Command::NavigateNext => self.cursor.next(len),
            Command::NavigatePrevious => self.cursor.previous(len),
            Command::AddSelectedToCart => {
                if let Some(product) = self.state.products.get(self.cursor.clamped(len)).cloned() {
                    self.state.add_to_cart(&product);
                }
            }
            _ => {}
        }
    }

    fn view_model(&self) -> ShopViewModel {
        ShopViewModel {
            description: "state held by the view itself",
            cart: CartViewModel::new(self.state.cart.len()),
            product_list: ProductListViewModel::new(
                &self.state.products,
                &self.cursor,
                self.loader.status(),
            ),
        }
    }
}
