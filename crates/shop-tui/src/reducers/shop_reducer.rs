//! Shop Reducer
//!
//! Root reducer of both store-backed variants: `products` and `cart`
//! combined into one state tree.

use super::cart_reducer::reduce_cart;
use super::products_reducer::reduce_products;
use crate::actions::ShopAction;
use shop_store::{
    combine_reducers, create_store, CombinedReducer, CombinedState, ReducerMap, Store, StoreError,
};

pub const PRODUCTS_KEY: &str = "products";
pub const CART_KEY: &str = "cart";

/// Store holding the combined shop state
pub type ShopStore = Store<CombinedState, ShopAction>;

/// Build the combined root reducer
pub fn shop_reducer() -> Result<CombinedReducer<ShopAction>, StoreError> {
    combine_reducers(
        ReducerMap::new()
            .slice(PRODUCTS_KEY, reduce_products)
            .slice(CART_KEY, reduce_cart),
    )
}

/// Create a fresh shop store, one per consuming variant
pub fn create_shop_store() -> Result<ShopStore, StoreError> {
    create_store(shop_reducer()?, None)
}
