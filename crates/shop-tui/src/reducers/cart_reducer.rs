//! Cart Reducer

use crate::actions::{CartAction, ShopAction};
use crate::domain_models::ProductId;
use std::rc::Rc;

/// Reducer for the `cart` slice. Defaults to an empty cart.
pub fn reduce_cart(state: Option<Rc<Vec<ProductId>>>, action: &ShopAction) -> Rc<Vec<ProductId>> {
    let state = state.unwrap_or_default();

    match action {
        ShopAction::Cart(action) => match action {
            CartAction::AddToCart(id) => {
                let mut cart = Vec::with_capacity(state.len() + 1);
                cart.extend_from_slice(&state);
                cart.push(*id);
                Rc::new(cart)
            }
        },
        ShopAction::Init | ShopAction::Products(_) => state,
    }
}
