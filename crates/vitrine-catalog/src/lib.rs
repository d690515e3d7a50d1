//! Vitrine product catalog
//!
//! On-demand product loading for tab panels: a single GraphQL query per
//! collection path, typed response decoding, and placeholder template
//! rendering of the returned products. Nothing here is cached or retried;
//! the caller decides what a failed fetch means.

mod client;
mod error;
mod product;
mod render;

pub use client::{CatalogClient, ProductSource};
pub use error::CatalogError;
pub use product::{Image, Money, Prices, Product};
pub use render::{render_product, render_products};

pub type Result<T> = std::result::Result<T, CatalogError>;
