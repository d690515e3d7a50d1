//! Carousel engine boundary
//!
//! The engine that actually draws and animates slides is an external
//! collaborator. The adapter hands it a fully derived [`EngineOptions`] and
//! the host element; everything past that point is the engine's problem.

use std::collections::BTreeMap;

use serde::Serialize;
use vitrine_dom::Element;

use crate::config::{Padding, SlideType};
use crate::Result;

/// Viewport width below which the mobile page size applies.
pub const MOBILE_BREAKPOINT_PX: u32 = 767;

/// Per-page override applied below a breakpoint width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Breakpoint {
    pub per_page: u32,
    pub per_move: u32,
}

/// The full option set an engine receives at mount time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineOptions {
    pub per_page: u32,
    pub per_move: u32,
    pub slide_type: SlideType,
    pub gap: u32,
    pub padding: Padding,
    pub autoplay: bool,
    pub interval_ms: u64,
    pub arrows: bool,
    pub pagination: bool,
    pub start: usize,
    pub breakpoints: BTreeMap<u32, Breakpoint>,
}

pub trait SliderEngine: Send {
    /// Mount against the host element's existing markup.
    fn mount(&mut self, host: &mut Element, options: &EngineOptions) -> Result<()>;
}

/// Backend used when no rendering engine is wired in; mounts are logged and
/// otherwise ignored.
#[derive(Debug, Default)]
pub struct NullEngine;

impl SliderEngine for NullEngine {
    fn mount(&mut self, host: &mut Element, options: &EngineOptions) -> Result<()> {
        tracing::debug!(
            tag = host.tag(),
            per_page = options.per_page,
            autoplay = options.autoplay,
            "null engine mount"
        );
        Ok(())
    }
}
