//! Local Shop State

use crate::domain_models::{Product, ProductId};

/// State held directly by the local-state variant, updated in place like
/// component state would be.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocalShopState {
    pub products: Vec<Product>,
    pub cart: Vec<ProductId>,
}

impl LocalShopState {
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    pub fn add_to_cart(&mut self, product: &Product) {
        self.cart.push(product.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_flow() {
        let mut state = LocalShopState::default();
        let widget = Product::new(1, "Widget");

        state.set_products(vec![widget.clone()]);
        state.add_to_cart(&widget);
        state.add_to_cart(&widget);

        assert_eq!(state.products, vec![widget]);
        assert_eq!(state.cart, vec![1, 1]);
    }
}
