//! Store variant
//!
//! State lives in a [`ShopStore`]. The view reads the store directly and a
//! subscription marks the view dirty after every dispatch.

use super::{Tab, Variant};
use crate::actions::{CartAction, ProductsAction, ShopAction};
use crate::catalog::{CatalogSource, ProductLoader};
use crate::input::Command;
use crate::reducers::{create_shop_store, ShopStore};
use crate::state::{selectors, ProductListState};
use crate::view_models::{CartViewModel, ProductListViewModel, ShopViewModel};
use shop_store::{StoreError, Unsubscribe};
use std::cell::Cell;
use std::rc::Rc;

pub struct StoreVariant {
    store: ShopStore,
    loader: ProductLoader,
    cursor: ProductListState,
    dirty: Rc<Cell<bool>>,
    subscription: Unsubscribe,
}

impl StoreVariant {
    pub fn new(source: CatalogSource) -> Result<Self, StoreError> {
        let store = create_shop_store()?;

        let dirty = Rc::new(Cell::new(false));
        let flag = Rc::clone(&dirty);
        let subscription = store.subscribe(move || flag.set(true));

        Ok(Self {
            store,
            loader: ProductLoader::new(source),
            cursor: ProductListState::default(),
            dirty,
            subscription,
        })
    }

    #[cfg(test)]
    pub fn store(&self) -> &ShopStore {
        &self.store
    }

    fn dispatch(&self, action: ShopAction) {
        if let Err(e) = self.store.dispatch(action) {
            log::error!("Store variant: dispatch failed: {}", e);
        }
    }
}

impl Variant for StoreVariant {
    fn tab(&self) -> Tab {
        Tab::Store
    }

    fn mount(&mut self) {
        self.loader.start();
    }

    fn poll(&mut self) -> bool {
        let loading = self.loader.is_loading();
        if let Some(products) = self.loader.poll() {
            self.dispatch(ShopAction::Products(ProductsAction::FetchProducts(products)));
        }
        let settled = loading && !self.loader.is_loading();
        self.dirty.replace(false) || settled
    }

    fn handle(&mut self, command: Command) {
        let products = selectors::products(&self.store.state());
        match command {
            Command::NavigateNext => self.cursor.next(products.len()),
            Command::NavigatePrevious => self.cursor.previous(products.len()),
            Command::AddSelectedToCart => {
                if let Some(product) = products.get(self.cursor.clamped(products.len())) {
                    self.dispatch(ShopAction::Cart(CartAction::AddToCart(product.id)));
                }
            }
            _ => {}
        }
    }

    fn view_model(&self) -> ShopViewModel {
        let state = self.store.state();
        ShopViewModel {
            description: "state read straight from a store",
            cart: CartViewModel::new(selectors::cart_count(&state)),
            product_list: ProductListViewModel::new(
                &selectors::products(&state),
                &self.cursor,
                self.loader.status(),
            ),
        }
    }

    fn replay(&mut self, actions: &[ShopAction]) {
        for action in actions {
            self.dispatch(action.clone());
        }
    }
}

impl Drop for StoreVariant {
    fn drop(&mut self) {
        self.subscription.unsubscribe();
    }
}
