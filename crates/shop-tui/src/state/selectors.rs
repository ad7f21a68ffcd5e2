//! Typed reads of the combined shop state

use crate::domain_models::{Product, ProductId};
use crate::reducers::{CART_KEY, PRODUCTS_KEY};
use shop_store::CombinedState;
use std::rc::Rc;

pub fn products(state: &CombinedState) -> Rc<Vec<Product>> {
    state.get::<Vec<Product>>(PRODUCTS_KEY).unwrap_or_default()
}

pub fn cart(state: &CombinedState) -> Rc<Vec<ProductId>> {
    state.get::<Vec<ProductId>>(CART_KEY).unwrap_or_default()
}

pub fn cart_count(state: &CombinedState) -> usize {
    cart(state).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_slices_read_as_empty() {
        let state = CombinedState::new();
        assert!(products(&state).is_empty());
        assert_eq!(cart_count(&state), 0);
    }

    #[test]
    fn test_reads_slices() {
        let state = CombinedState::new()
            .with_slice(PRODUCTS_KEY, vec![Product::new(1, "Widget")])
            .with_slice(CART_KEY, vec![1u64, 1]);
        assert_eq!(products(&state).len(), 1);
        assert_eq!(*cart(&state), vec![1, 1]);
    }
}
