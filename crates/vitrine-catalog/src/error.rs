//! Catalog error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    #[error("response missing {0}")]
    MissingData(&'static str),

    #[error("no category at path: {0}")]
    CategoryNotFound(String),
}
