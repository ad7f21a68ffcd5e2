use crate::domain_models::ProductId;

/// Cart actions
#[derive(Debug, Clone, PartialEq, strum::IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CartAction {
    /// Append a product to the cart (no dedup)
    AddToCart(ProductId),
}
