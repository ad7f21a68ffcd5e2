//! Application shell
//!
//! Owns the three variants and routes commands: tab commands switch the
//! active variant, everything else goes to the active one.

use crate::actions::ShopAction;
use crate::catalog::CatalogSource;
use crate::input::Command;
use crate::variants::{ConnectedVariant, LocalStateVariant, StoreVariant, Tab, Variant};
use crate::view_models::{AppViewModel, TabsViewModel};
use anyhow::Result;
use std::str::FromStr;

pub struct App {
    pub running: bool,
    active: Tab,
    /// Indexed by [`Tab::index`]
    variants: Vec<Box<dyn Variant>>,
}

impl App {
    pub fn new(initial: Tab, source: CatalogSource) -> Result<Self> {
        let variants: Vec<Box<dyn Variant>> = vec![
            Box::new(LocalStateVariant::new(source.clone())),
            Box::new(StoreVariant::new(source.clone())?),
            Box::new(ConnectedVariant::new(source)?),
        ];

        let mut app = Self {
            running: true,
            active: initial,
            variants,
        };
        app.activate(initial);
        Ok(app)
    }

    pub fn active_tab(&self) -> Tab {
        self.active
    }

    fn activate(&mut self, tab: Tab) {
        self.active = tab;
        if let Some(variant) = self.variants.get_mut(tab.index()) {
            log::debug!("Switching to {} variant", variant.tab());
            variant.mount();
        }
    }

    pub fn handle(&mut self, command: Command) {
        match command {
            Command::Quit => self.running = false,
            Command::NextTab => self.activate(self.active.next()),
            Command::PreviousTab => self.activate(self.active.previous()),
            Command::SelectTab(tab) => self.activate(tab),
            _ => {
                if let Some(variant) = self.variants.get_mut(self.active.index()) {
                    variant.handle(command);
                }
            }
        }
    }

    /// Poll every variant, visible or not. Returns true when a redraw is
    /// needed.
    pub fn poll(&mut self) -> bool {
        self.variants
            .iter_mut()
            .fold(false, |redraw, variant| variant.poll() || redraw)
    }

    /// Dispatch recorded actions into the store-backed variants
    pub fn replay(&mut self, actions: &[ShopAction]) {
        log::info!("Replaying {} actions", actions.len());
        for variant in &mut self.variants {
            variant.replay(actions);
        }
    }

    pub fn view_model(&self) -> Option<AppViewModel> {
        let variant = self.variants.get(self.active.index())?;
        Some(AppViewModel {
            tabs: TabsViewModel::new(self.active),
            shop: variant.view_model(),
        })
    }
}

/// Tab to open first: the CLI choice, else the configured view name
pub fn initial_tab(requested: Option<Tab>, configured: &str) -> Tab {
    requested.unwrap_or_else(|| {
        Tab::from_str(configured).unwrap_or_else(|_| {
            log::warn!("Unknown initial view `{}`, using state", configured);
            Tab::State
        })
    })
}
