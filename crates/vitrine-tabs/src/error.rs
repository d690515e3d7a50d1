//! Tab error types

use thiserror::Error;
use vitrine_catalog::CatalogError;

#[derive(Error, Debug)]
pub enum TabError {
    #[error("tab set is empty")]
    NoTabs,

    #[error("tab element is missing an id")]
    MissingTabId,

    #[error("tab not found: {0}")]
    TabNotFound(String),

    #[error("tab index {index} out of range ({count} tabs)")]
    TabOutOfRange { index: usize, count: usize },

    #[error("tab {tab_id} declares no control target")]
    ControlTargetMissing { tab_id: String },

    #[error("panel not found: {0}")]
    PanelNotFound(String),

    #[error("tab set has no product template")]
    MissingTemplate,

    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
}
