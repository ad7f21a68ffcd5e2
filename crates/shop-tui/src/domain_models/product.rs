use serde::{Deserialize, Serialize};

/// Product identifier
pub type ProductId = u64;

/// A product that can be put into the cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
}

impl Product {
    pub fn new(id: ProductId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}
