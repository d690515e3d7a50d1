//! Slider error types

use thiserror::Error;
use vitrine_dom::DomError;

#[derive(Error, Debug)]
pub enum SliderError {
    #[error("slider host <{tag}> is missing its track/list markup")]
    MissingTrack { tag: String },

    #[error("carousel engine already mounted")]
    AlreadyMounted,

    #[error("DOM error: {0}")]
    Dom(#[from] DomError),

    #[error("engine error: {0}")]
    Engine(String),
}
