//! Product List View Model

use crate::catalog::FetchStatus;
use crate::domain_models::Product;
use crate::state::ProductListState;

/// A row of the product list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRowViewModel {
    pub label: String,
}

/// View model for the product list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductListViewModel {
    pub rows: Vec<ProductRowViewModel>,
    /// Highlighted row, `None` when the list is empty
    pub selected: Option<usize>,
    /// Shown instead of the rows while there is nothing to list
    pub placeholder: Option<String>,
}

impl ProductListViewModel {
    pub fn new(products: &[Product], cursor: &ProductListState, status: &FetchStatus) -> Self {
        let rows = products
            .iter()
            .map(|p| ProductRowViewModel {
                label: format!("{}  [add to cart]", p.title),
            })
            .collect::<Vec<_>>();

        let selected = (!rows.is_empty()).then(|| cursor.clamped(rows.len()));

        let placeholder = if !rows.is_empty() {
            None
        } else {
            match status {
                FetchStatus::NotStarted => None,
                FetchStatus::Loading => Some("loading products...".to_string()),
                FetchStatus::Loaded => Some("no products".to_string()),
                FetchStatus::Failed(e) => Some(format!("failed to load products: {}", e)),
            }
        };

        Self {
            rows,
            selected,
            placeholder,
        }
    }
}
