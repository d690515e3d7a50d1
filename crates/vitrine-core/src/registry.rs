//! Component registry
//!
//! Explicit model of custom-element registration: a tag is defined once,
//! process-wide, and redefining it is an error. The registry is what the
//! upgrade pass consults to decide which elements get which component.

use std::collections::HashMap;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Slider,
    TabStrip,
}

#[derive(Debug, Default)]
pub struct Registry {
    definitions: HashMap<String, ComponentKind>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define(&mut self, tag: &str, kind: ComponentKind) -> Result<()> {
        if self.definitions.contains_key(tag) {
            return Err(CoreError::DuplicateDefinition(tag.to_string()));
        }

        self.definitions.insert(tag.to_string(), kind);
        tracing::debug!(tag, ?kind, "component defined");

        Ok(())
    }

    pub fn kind_of(&self, tag: &str) -> Option<ComponentKind> {
        self.definitions.get(tag).copied()
    }

    pub fn is_defined(&self, tag: &str) -> bool {
        self.definitions.contains_key(tag)
    }
}

/// Define the built-in component tags. Called once at startup; calling it
/// against a registry that already holds them fails.
pub fn register_components(registry: &mut Registry) -> Result<()> {
    registry.define(vitrine_slider::ELEMENT_TAG, ComponentKind::Slider)?;
    registry.define(vitrine_tabs::ELEMENT_TAG, ComponentKind::TabStrip)?;
    Ok(())
}
