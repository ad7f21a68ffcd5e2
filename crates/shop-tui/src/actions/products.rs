use crate::domain_models::Product;

/// Product list actions
#[derive(Debug, Clone, PartialEq, strum::IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductsAction {
    /// The product fetch completed
    FetchProducts(Vec<Product>),
}
