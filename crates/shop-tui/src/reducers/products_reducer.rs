//! Products Reducer

use crate::actions::{ProductsAction, ShopAction};
use crate::domain_models::Product;
use std::rc::Rc;

/// Reducer for the `products` slice. Defaults to an empty list.
pub fn reduce_products(state: Option<Rc<Vec<Product>>>, action: &ShopAction) -> Rc<Vec<Product>> {
    match action {
        ShopAction::Products(action) => match action {
            ProductsAction::FetchProducts(products) => Rc::new(products.clone()),
        },
        ShopAction::Init | ShopAction::Cart(_) => state.unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::CartAction;

    #[test]
    fn test_default_is_empty() {
        assert!(reduce_products(None, &ShopAction::Init).is_empty());
    }

    #[test]
    fn test_fetch_replaces_list() {
        let before = Rc::new(vec![Product::new(9, "Old")]);
        let after = reduce_products(
            Some(before),
            &ShopAction::Products(ProductsAction::FetchProducts(vec![Product::new(1, "Widget")])),
        );
        assert_eq!(*after, vec![Product::new(1, "Widget")]);
    }

    #[test]
    fn test_other_domains_keep_pointer() {
        let before = Rc::new(vec![Product::new(1, "Widget")]);
        let after = reduce_products(
            Some(Rc::clone(&before)),
            &ShopAction::Cart(CartAction::AddToCart(1)),
        );
        assert!(Rc::ptr_eq(&before, &after));
    }
}
