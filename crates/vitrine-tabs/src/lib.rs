//! Vitrine tab controller
//!
//! Owns which tab of a tab set is active, moves keyboard focus around the
//! strip, and loads a panel's product collection the first time that panel
//! is shown. Exactly one tab is selected and exactly one panel visible at
//! any time; all other tabs are out of the sequential focus order.

mod controller;
mod error;
mod key;
mod markup;

pub use controller::TabController;
pub use error::TabError;
pub use key::{Key, KeyAction};

/// Tag the tab set registers under in page markup.
pub const ELEMENT_TAG: &str = "vitrine-tabs";
/// Id of the element whose inner markup is the per-product template.
pub const TEMPLATE_ID: &str = "product-template";

pub type Result<T> = std::result::Result<T, TabError>;
