//! Shop variants
//!
//! The same shop (product list + shopping list count) built three ways:
//!
//! - [`LocalStateVariant`]: state owned by the variant, mutated in place
//! - [`StoreVariant`]: state in a store, read directly and re-read on notify
//! - [`ConnectedVariant`]: state in a store, reached through connectors only
//!
//! Each variant has its own state; nothing is shared between tabs.

mod connected_variant;
mod local_variant;
mod store_variant;

pub use connected_variant::ConnectedVariant;
pub use local_variant::LocalStateVariant;
pub use store_variant::StoreVariant;

use crate::actions::ShopAction;
use crate::input::Command;
use crate::view_models::ShopViewModel;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Tab selecting a variant
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, clap::ValueEnum,
)]
#[strum(serialize_all = "lowercase")]
pub enum Tab {
    State,
    Store,
    Connected,
}

impl Tab {
    /// Position in the tab bar
    pub fn index(self) -> usize {
        Tab::iter().position(|tab| tab == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        let tabs: Vec<_> = Tab::iter().collect();
        tabs[(self.index() + 1) % tabs.len()]
    }

    pub fn previous(self) -> Self {
        let tabs: Vec<_> = Tab::iter().collect();
        tabs[(self.index() + tabs.len() - 1) % tabs.len()]
    }
}

/// One way of managing the shop state
pub trait Variant {
    fn tab(&self) -> Tab;

    /// Called whenever the variant becomes visible. Starts the product fetch
    /// the first time.
    fn mount(&mut self);

    /// Pick up background results. Returns true when the view changed.
    fn poll(&mut self) -> bool;

    fn handle(&mut self, command: Command);

    fn view_model(&self) -> ShopViewModel;

    /// Feed recorded actions into the variant's state
    fn replay(&mut self, _actions: &[ShopAction]) {}
}
