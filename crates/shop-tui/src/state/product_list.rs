//! Product List State

/// Cursor over the product list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductListState {
    pub selected: usize,
}

impl ProductListState {
    /// Move to the next product, wrapping around
    pub fn next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.clamped(len) + 1) % len;
        }
    }

    /// Move to the previous product, wrapping around
    pub fn previous(&mut self, len: usize) {
        if len > 0 {
            let current = self.clamped(len);
            self.selected = if current == 0 { len - 1 } else { current - 1 };
        }
    }

    /// Selected index, kept inside a list of `len` items
    pub fn clamped(&self, len: usize) -> usize {
        self.selected.min(len.saturating_sub(1))
    }
}
