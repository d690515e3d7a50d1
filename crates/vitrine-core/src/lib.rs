//! Vitrine core
//!
//! Central coordination layer for the storefront components: configuration,
//! the define-once component registry, and the [`Theme`] facade that
//! upgrades page markup and drives tab controllers against the catalog.

mod config;
mod error;
mod registry;
mod theme;

pub use config::Config;
pub use error::CoreError;
pub use registry::{register_components, ComponentKind, Registry};
pub use theme::{Theme, Upgraded};

// Re-export the component surface
pub use vitrine_catalog::{CatalogClient, CatalogError, Product, ProductSource};
pub use vitrine_dom::{Document, DomError, Element, Node};
pub use vitrine_slider::{NullEngine, SliderAdapter, SliderConfig, SliderEngine, SliderError};
pub use vitrine_tabs::{Key, KeyAction, TabController, TabError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
