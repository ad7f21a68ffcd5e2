//! Tabs View Model

use crate::variants::Tab;
use strum::IntoEnumIterator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabViewModel {
    /// Display text, e.g. "1 state"
    pub text: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabsViewModel {
    pub tabs: Vec<TabViewModel>,
}

impl TabsViewModel {
    pub fn new(active: Tab) -> Self {
        let tabs = Tab::iter()
            .map(|tab| TabViewModel {
                text: format!("{} {}", tab.index() + 1, tab),
                active: tab == active,
            })
            .collect();

        Self { tabs }
    }
}
