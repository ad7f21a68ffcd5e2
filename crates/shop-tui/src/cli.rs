//! Command line arguments

use crate::variants::Tab;
use clap::Parser;
use std::path::PathBuf;

/// Shopping list demo: the same shop with local state, a store, and a
/// connected store
#[derive(Debug, Parser)]
#[command(name = "shop-tui", version, about)]
pub struct Args {
    /// Tab to open first (overrides `initial_view` from the config)
    #[arg(long, value_enum)]
    pub view: Option<Tab>,

    /// Explicit config file instead of the default search
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// TOML product catalog (overrides `catalog_path` from the config)
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// JSON array of action records dispatched into both stores at start
    #[arg(long, value_name = "PATH")]
    pub replay: Option<PathBuf>,
}
