//! Cart View Model

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartViewModel {
    pub count: usize,
    pub text: String,
}

impl CartViewModel {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            text: format!("shopping list count: {}", count),
        }
    }
}
