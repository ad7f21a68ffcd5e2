//! Slice reducers and the combined shop reducer

pub mod cart_reducer;
pub mod products_reducer;
pub mod shop_reducer;

pub use shop_reducer::{create_shop_store, shop_reducer, ShopStore, CART_KEY, PRODUCTS_KEY};
