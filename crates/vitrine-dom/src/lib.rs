//! Vitrine DOM substrate
//!
//! The storefront components never touch a real browser DOM. They operate on
//! this in-memory element tree instead: markup goes in through the fragment
//! parser, mutations happen on [`Element`] values, and serialized markup
//! comes back out. Focus is a document-level slot, not a widget property.

pub mod attrs;
mod document;
mod element;
mod error;

pub use document::Document;
pub use element::{parse_fragment, Element, Node};
pub use error::DomError;

pub type Result<T> = std::result::Result<T, DomError>;
