//! Connected variant
//!
//! Same store as the store variant, but components never touch it. The
//! product list and the cart summary each get a [`Connected`] built from
//! their connector and only see props and callbacks.

use super::{Tab, Variant};
use crate::actions::ShopAction;
use crate::bindings::{
    cart_connector, product_list_connector, CartProps, ProductListActions, ProductListProps,
};
use crate::catalog::{CatalogSource, ProductLoader};
use crate::input::Command;
use crate::reducers::{create_shop_store, ShopStore};
use crate::state::ProductListState;
use crate::view_models::{CartViewModel, ProductListViewModel, ShopViewModel};
use shop_store::{CombinedState, Connected, StoreError};

pub struct ConnectedVariant {
    /// Provider of the variant's subtree
    store: ShopStore,
    loader: ProductLoader,
    cursor: ProductListState,
    product_list: Connected<CombinedState, ShopAction, ProductListProps, ProductListActions>,
    cart: Connected<CombinedState, ShopAction, CartProps, ()>,
}

impl ConnectedVariant {
    pub fn new(source: CatalogSource) -> Result<Self, StoreError> {
        let store = create_shop_store()?;
        let product_list = product_list_connector().connect(&store);
        let cart = cart_connector().connect(&store);

        Ok(Self {
            store,
            loader: ProductLoader::new(source),
            cursor: ProductListState::default(),
            product_list,
            cart,
        })
    }

    #[cfg(test)]
    pub fn store(&self) -> &ShopStore {
        &self.store
    }
}

impl Variant for ConnectedVariant {
    fn tab(&self) -> Tab {
        Tab::Connected
    }

    fn mount(&mut self) {
        self.loader.start();
    }

    fn poll(&mut self) -> bool {
        let loading = self.loader.is_loading();
        if let Some(products) = self.loader.poll() {
            (self.product_list.actions().fetch_products)(products);
        }
        let settled = loading && !self.loader.is_loading();

        // Both flags must be consumed
        let list_changed = self.product_list.take_changed();
        let cart_changed = self.cart.take_changed();
        list_changed || cart_changed || settled
    }

    fn handle(&mut self, command: Command) {
        let props = self.product_list.props();
        let len = props.products.len();
        match command {
            Command::NavigateNext => self.cursor.next(len),
            Command::NavigatePrevious => self.cursor.previous(len),
            Command::AddSelectedToCart => {
                if let Some(product) = props.products.get(self.cursor.clamped(len)) {
                    (self.product_list.actions().add_to_cart)(product.id);
                }
            }
            _ => {}
        }
    }

    fn view_model(&self) -> ShopViewModel {
        ShopViewModel {
            description: "store reached through connectors",
            cart: CartViewModel::new(self.cart.props().count),
            product_list: ProductListViewModel::new(
                &self.product_list.props().products,
                &self.cursor,
                self.loader.status(),
            ),
        }
    }

    fn replay(&mut self, actions: &[ShopAction]) {
        for action in actions {
            if let Err(e) = self.store.dispatch(action.clone()) {
                log::error!("Connected variant: replay dispatch failed: {}", e);
            }
        }
    }
}
