//! Actions module
//!
//! Actions are closed enums, one per reducer domain, wrapped by the root
//! [`ShopAction`]. Slice reducers match on the root enum exhaustively, so a
//! new domain can't be forgotten.

pub mod cart;
pub mod products;
pub mod record;

pub use cart::CartAction;
pub use products::ProductsAction;
pub use record::RecordError;

use shop_store::{Action, INIT_ACTION_TYPE};

/// Root action enum - tagged by domain
#[derive(Debug, Clone, PartialEq)]
pub enum ShopAction {
    /// Store init sentinel
    Init,
    /// Product list actions
    Products(ProductsAction),
    /// Cart actions
    Cart(CartAction),
}

impl Action for ShopAction {
    fn init() -> Self {
        Self::Init
    }

    fn action_type(&self) -> Option<&str> {
        Some(match self {
            Self::Init => INIT_ACTION_TYPE,
            Self::Products(action) => action.into(),
            Self::Cart(action) => action.into(),
        })
    }
}
