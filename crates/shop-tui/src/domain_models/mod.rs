//! Domain models

mod product;

pub use product::{Product, ProductId};
