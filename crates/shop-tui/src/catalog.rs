//! Product catalog and the deferred product fetch
//!
//! Each variant fetches its products once, when it is first shown. The
//! fetch runs on a worker thread and reports back over a channel; the UI
//! thread polls it every tick and feeds the result into its own state.

use crate::domain_models::Product;
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    products: Vec<Product>,
}

/// Products used when no catalog file is configured
pub fn builtin_catalog() -> Vec<Product> {
    vec![
        Product::new(1, "Widget"),
        Product::new(2, "Gadget"),
        Product::new(3, "Sprocket"),
        Product::new(4, "Flux capacitor"),
        Product::new(5, "Rubber duck"),
    ]
}

/// Parse a TOML catalog:
///
/// ```toml
/// [[products]]
/// id = 1
/// title = "Widget"
/// ```
pub fn parse_catalog(content: &str) -> Result<Vec<Product>> {
    let file: CatalogFile = toml::from_str(content)?;
    Ok(file.products)
}

/// Read a TOML catalog file
pub fn load_catalog(path: &Path) -> Result<Vec<Product>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;
    parse_catalog(&content).with_context(|| format!("Failed to parse catalog {}", path.display()))
}

/// Where and how the products are fetched
#[derive(Debug, Clone, Default)]
pub struct CatalogSource {
    pub path: Option<PathBuf>,
    pub delay: Duration,
}

impl CatalogSource {
    pub fn load(&self) -> Result<Vec<Product>> {
        match &self.path {
            Some(path) => load_catalog(path),
            None => Ok(builtin_catalog()),
        }
    }
}

/// A product fetch running on a worker thread
pub struct ProductFetch {
    rx: Receiver<Result<Vec<Product>>>,
}

impl ProductFetch {
    pub fn spawn(source: CatalogSource) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            if !source.delay.is_zero() {
                thread::sleep(source.delay);
            }
            let result = source.load();
            if tx.send(result).is_err() {
                log::debug!("Product fetch finished after its receiver was dropped");
            }
        });

        Self { rx }
    }

    /// Non-blocking check for the fetch result
    pub fn poll(&self) -> Option<Result<Vec<Product>>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(anyhow!("product fetch worker exited"))),
        }
    }
}

/// Lifecycle of a variant's product fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus {
    NotStarted,
    Loading,
    Loaded,
    Failed(String),
}

/// Starts the fetch once and tracks its status
pub struct ProductLoader {
    source: CatalogSource,
    pending: Option<ProductFetch>,
    status: FetchStatus,
}

impl ProductLoader {
    pub fn new(source: CatalogSource) -> Self {
        Self {
            source,
            pending: None,
            status: FetchStatus::NotStarted,
        }
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    /// Start the fetch unless it was started before
    pub fn start(&mut self) {
        if self.status == FetchStatus::NotStarted {
            log::debug!("Starting product fetch from {:?}", self.source.path);
            self.pending = Some(ProductFetch::spawn(self.source.clone()));
            self.status = FetchStatus::Loading;
        }
    }

    /// Products, once the fetch has completed successfully
    pub fn poll(&mut self) -> Option<Vec<Product>> {
        let result = self.pending.as_ref()?.poll()?;
        self.pending = None;

        match result {
            Ok(products) => {
                log::info!("Fetched {} products", products.len());
                self.status = FetchStatus::Loaded;
                Some(products)
            }
            Err(e) => {
                log::error!("Product fetch failed: {:#}", e);
                self.status = FetchStatus::Failed(e.to_string());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::io::Write;
    use std::time::Instant;

    fn wait_for(loader: &mut ProductLoader) -> Option<Vec<Product>> {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if let Some(products) = loader.poll() {
                return Some(products);
            }
            if loader.status() != &FetchStatus::Loading {
                return None;
            }
            thread::sleep(Duration::from_millis(5));
        }
        None
    }

    #[test]
    fn test_parse_catalog() {
        let products = parse_catalog(
            r#"
            [[products]]
            id = 1
            title = "Widget"

            [[products]]
            id = 2
            title = "Gadget"
            "#,
        )
        .unwrap();
        assert_eq!(
            products,
            vec![Product::new(1, "Widget"), Product::new(2, "Gadget")]
        );
    }

    #[test]
    fn test_parse_empty_catalog() {
        assert!(parse_catalog("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_invalid_catalog() {
        assert!(parse_catalog("[[products]]\nid = \"one\"").is_err());
    }

    #[test]
    fn test_builtin_ids_are_unique() {
        let ids: HashSet<_> = builtin_catalog().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), builtin_catalog().len());
    }

    #[test]
    fn test_loader_fetches_builtin_once() {
        let mut loader = ProductLoader::new(CatalogSource::default());
        assert_eq!(loader.status(), &FetchStatus::NotStarted);
        assert_eq!(loader.poll(), None);

        loader.start();
        assert_eq!(loader.status(), &FetchStatus::Loading);

        assert_eq!(wait_for(&mut loader), Some(builtin_catalog()));
        assert_eq!(loader.status(), &FetchStatus::Loaded);

        // Starting again does not refetch
        loader.start();
        assert_eq!(loader.status(), &FetchStatus::Loaded);
        assert_eq!(loader.poll(), None);
    }

    #[test]
    fn test_loader_reads_catalog_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[[products]]\nid = 7\ntitle = \"Gizmo\"").unwrap();

        let mut loader = ProductLoader::new(CatalogSource {
            path: Some(file.path().to_path_buf()),
            delay: Duration::ZERO,
        });
        loader.start();

        assert_eq!(wait_for(&mut loader), Some(vec![Product::new(7, "Gizmo")]));
    }

    #[test]
    fn test_loader_reports_missing_file() {
        let mut loader = ProductLoader::new(CatalogSource {
            path: Some(PathBuf::from("/nonexistent/catalog.toml")),
            delay: Duration::ZERO,
        });
        loader.start();

        assert_eq!(wait_for(&mut loader), None);
        assert!(matches!(loader.status(), FetchStatus::Failed(msg) if msg.contains("Failed to read catalog")));
    }
}
