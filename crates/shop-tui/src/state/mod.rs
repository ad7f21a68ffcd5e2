//! Application State Module
//!
//! - `selectors`: typed reads of the combined store state
//! - `LocalShopState`: state owned by the local-state variant itself
//! - `ProductListState`: UI-only cursor state, never part of a store

mod local;
mod product_list;
pub mod selectors;

pub use local::LocalShopState;
pub use product_list::ProductListState;
