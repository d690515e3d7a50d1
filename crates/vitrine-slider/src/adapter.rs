//! Slider adapter
//!
//! Binds a derived configuration to a host element and mounts the carousel
//! engine against it exactly once.

use vitrine_dom::Element;

use crate::config::SliderConfig;
use crate::engine::SliderEngine;
use crate::error::SliderError;
use crate::{Result, LIST_CLASS, TRACK_CLASS};

pub struct SliderAdapter {
    config: SliderConfig,
    mounted: bool,
}

impl SliderAdapter {
    /// Derive the adapter's configuration from the host element.
    ///
    /// Parse failures (malformed padding JSON) surface here, before any
    /// side effect has happened.
    pub fn from_element(el: &Element) -> Result<Self> {
        Ok(Self {
            config: SliderConfig::from_element(el)?,
            mounted: false,
        })
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Mount the engine against the host's existing track/list markup.
    ///
    /// The host must already contain the expected child structure; mounting
    /// a second time is an error.
    pub fn mount(&mut self, host: &mut Element, engine: &mut dyn SliderEngine) -> Result<()> {
        if self.mounted {
            return Err(SliderError::AlreadyMounted);
        }

        if !has_track_structure(host) {
            return Err(SliderError::MissingTrack {
                tag: host.tag().to_string(),
            });
        }

        let options = self.config.engine_options();
        engine.mount(host, &options)?;
        self.mounted = true;

        tracing::debug!(
            tag = host.tag(),
            per_page = self.config.desktop_per_page,
            "carousel mounted"
        );

        Ok(())
    }
}

fn has_track_structure(host: &Element) -> bool {
    host.child_elements().any(|track| {
        track.has_class(TRACK_CLASS)
            && track.child_elements().any(|list| list.has_class(LIST_CLASS))
    })
}
