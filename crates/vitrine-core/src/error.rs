//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("DOM error: {0}")]
    Dom(#[from] vitrine_dom::DomError),

    #[error("slider error: {0}")]
    Slider(#[from] vitrine_slider::SliderError),

    #[error("tab error: {0}")]
    Tab(#[from] vitrine_tabs::TabError),

    #[error("catalog error: {0}")]
    Catalog(#[from] vitrine_catalog::CatalogError),

    #[error("component already defined: {0}")]
    DuplicateDefinition(String),
}
