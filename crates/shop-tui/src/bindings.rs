//! Connectors of the connected variant
//!
//! Each component gets a pair of plain functions: one deriving its props
//! from the combined state, one deriving its callbacks from a dispatcher.

use crate::actions::{CartAction, ProductsAction, ShopAction};
use crate::domain_models::{Product, ProductId};
use crate::state::selectors;
use shop_store::{CombinedState, Connector, Dispatch};
use std::rc::Rc;

/// Inputs of the product list
#[derive(Debug, Clone, PartialEq)]
pub struct ProductListProps {
    pub products: Rc<Vec<Product>>,
}

/// Callbacks of the product list
pub struct ProductListActions {
    pub fetch_products: Box<dyn Fn(Vec<Product>)>,
    pub add_to_cart: Box<dyn Fn(ProductId)>,
}

/// Inputs of the cart summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartProps {
    pub count: usize,
}

pub fn map_state_to_product_list_props(state: &CombinedState) -> ProductListProps {
    ProductListProps {
        products: selectors::products(state),
    }
}

pub fn map_dispatch_to_product_list_actions(
    dispatch: Rc<dyn Dispatch<ShopAction>>,
) -> ProductListActions {
    let fetch = Rc::clone(&dispatch);
    ProductListActions {
        fetch_products: Box::new(move |products| {
            send(&*fetch, ShopAction::Products(ProductsAction::FetchProducts(products)))
        }),
        add_to_cart: Box::new(move |id| {
            send(&*dispatch, ShopAction::Cart(CartAction::AddToCart(id)))
        }),
    }
}

pub fn map_state_to_cart_props(state: &CombinedState) -> CartProps {
    CartProps {
        count: selectors::cart_count(state),
    }
}

pub type ProductListConnector =
    Connector<CombinedState, ShopAction, ProductListProps, ProductListActions>;
pub type CartConnector = Connector<CombinedState, ShopAction, CartProps, ()>;

pub fn product_list_connector() -> ProductListConnector {
    Connector::new(
        map_state_to_product_list_props,
        map_dispatch_to_product_list_actions,
    )
}

pub fn cart_connector() -> CartConnector {
    Connector::state_only(map_state_to_cart_props)
}

fn send(dispatch: &dyn Dispatch<ShopAction>, action: ShopAction) {
    if let Err(e) = dispatch.dispatch(action) {
        log::error!("Connected variant: dispatch failed: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducers::{CART_KEY, PRODUCTS_KEY};
    use pretty_assertions::assert_eq;
    use shop_store::StoreError;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<ShopAction>>);

    impl Dispatch<ShopAction> for Recorder {
        fn dispatch(&self, action: ShopAction) -> Result<ShopAction, StoreError> {
            self.0.borrow_mut().push(action.clone());
            Ok(action)
        }
    }

    #[test]
    fn test_state_mappings() {
        let state = CombinedState::new()
            .with_slice(PRODUCTS_KEY, vec![Product::new(1, "Widget")])
            .with_slice(CART_KEY, vec![1u64, 1, 1]);

        assert_eq!(
            *map_state_to_product_list_props(&state).products,
            vec![Product::new(1, "Widget")]
        );
        assert_eq!(map_state_to_cart_props(&state), CartProps { count: 3 });
    }

    #[test]
    fn test_dispatch_mapping_emits_actions() {
        let recorder = Rc::new(Recorder::default());
        let actions = map_dispatch_to_product_list_actions(recorder.clone());

        (actions.fetch_products)(vec![Product::new(2, "Gadget")]);
        (actions.add_to_cart)(2);

        assert_eq!(
            *recorder.0.borrow(),
            vec![
                ShopAction::Products(ProductsAction::FetchProducts(vec![Product::new(
                    2, "Gadget"
                )])),
                ShopAction::Cart(CartAction::AddToCart(2)),
            ]
        );
    }

    #[test]
    fn test_cart_connector_has_no_actions() {
        let connector = cart_connector();
        let recorder = Rc::new(Recorder::default());
        connector.dispatch_props(recorder.clone());
        assert!(recorder.0.borrow().is_empty());
    }
}
