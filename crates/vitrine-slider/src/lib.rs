//! Vitrine slider adapter
//!
//! Wraps an external carousel rendering engine behind a declarative element:
//! configuration is derived once from the host element's attributes, the
//! engine is mounted exactly once against the host's existing track/list
//! markup, and there is no mutation API afterwards. Reconfiguring means
//! recreating the element.

mod adapter;
mod config;
mod engine;
mod error;

pub use adapter::SliderAdapter;
pub use config::{Padding, SlideType, SliderConfig};
pub use engine::{Breakpoint, EngineOptions, NullEngine, SliderEngine, MOBILE_BREAKPOINT_PX};
pub use error::SliderError;

/// Tag the slider registers under in page markup.
pub const ELEMENT_TAG: &str = "vitrine-slider";
/// Class of the track element the host must already contain.
pub const TRACK_CLASS: &str = "carousel__track";
/// Class of the slide list inside the track.
pub const LIST_CLASS: &str = "carousel__list";

pub type Result<T> = std::result::Result<T, SliderError>;
