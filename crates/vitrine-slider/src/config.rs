//! Carousel configuration
//!
//! Derived once from the host element's attributes, immutable afterwards.
//! Every malformed numeric or flag value quietly takes its default; the
//! JSON-valued padding attribute is the one loud failure.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use vitrine_dom::{attrs, Element};

use crate::engine::{Breakpoint, EngineOptions, MOBILE_BREAKPOINT_PX};
use crate::Result;

/// How the carousel advances past its last slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideType {
    /// Wrap around seamlessly.
    Loop,
    /// Stop at the ends.
    Slide,
    /// Cross-fade in place.
    Fade,
}

impl std::str::FromStr for SlideType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "loop" => Ok(SlideType::Loop),
            "slide" => Ok(SlideType::Slide),
            "fade" => Ok(SlideType::Fade),
            _ => Err(format!("Unknown slide type: {}", s)),
        }
    }
}

/// Spacing outside the visible slides, either uniform pixels or per-edge
/// CSS lengths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Padding {
    Uniform(u32),
    Edges {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        left: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        right: Option<String>,
    },
}

impl Default for Padding {
    fn default() -> Self {
        Padding::Uniform(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    /// Slides shown per page on desktop viewports.
    pub desktop_per_page: u32,
    /// Slides shown per page below the mobile breakpoint.
    pub mobile_per_page: u32,
    pub slide_type: SlideType,
    /// Gap between slides, pixels.
    pub gap: u32,
    pub padding: Padding,
    /// Autoplay advance interval, milliseconds.
    pub interval_ms: u64,
    pub autoplay: bool,
    pub arrows: bool,
    pub pagination: bool,
}

impl SliderConfig {
    /// Derive the configuration from the host element's attributes.
    ///
    /// Pure: no side effects, and the same element always yields the same
    /// configuration. A malformed `data-padding` value is the only error.
    pub fn from_element(el: &Element) -> Result<Self> {
        Ok(Self {
            desktop_per_page: attrs::uint_or(el, "data-desktop-per-page", 4),
            mobile_per_page: attrs::uint_or(el, "data-mobile-per-page", 2),
            slide_type: attrs::string_or(el, "data-slide-type", "loop")
                .parse()
                .unwrap_or(SlideType::Loop),
            gap: attrs::uint_or(el, "data-gap", 0),
            padding: attrs::json_opt(el, "data-padding")?.unwrap_or_default(),
            interval_ms: u64::from(attrs::uint_or(el, "data-interval", 1000)),
            autoplay: attrs::flag(el, "data-autoplay"),
            arrows: attrs::flag(el, "data-show-arrows"),
            pagination: attrs::flag(el, "data-show-dots"),
        })
    }

    /// What the external engine consumes at mount time. The start index is
    /// fixed at 0 and the single breakpoint swaps in the mobile page size.
    pub fn engine_options(&self) -> EngineOptions {
        let mut breakpoints = BTreeMap::new();
        breakpoints.insert(
            MOBILE_BREAKPOINT_PX,
            Breakpoint {
                per_page: self.mobile_per_page,
                per_move: self.mobile_per_page,
            },
        );

        EngineOptions {
            per_page: self.desktop_per_page,
            per_move: self.desktop_per_page,
            slide_type: self.slide_type,
            gap: self.gap,
            padding: self.padding.clone(),
            autoplay: self.autoplay,
            interval_ms: self.interval_ms,
            arrows: self.arrows,
            pagination: self.pagination,
            start: 0,
            breakpoints,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_dom::DomError;
    use crate::SliderError;

    #[test]
    fn test_defaults_when_attributes_absent() {
        let config = SliderConfig::from_element(&Element::new("vitrine-slider")).unwrap();

        assert_eq!(config.desktop_per_page, 4);
        assert_eq!(config.mobile_per_page, 2);
        assert_eq!(config.slide_type, SlideType::Loop);
        assert_eq!(config.gap, 0);
        assert_eq!(config.padding, Padding::Uniform(0));
        assert_eq!(config.interval_ms, 1000);
        assert!(!config.autoplay);
        assert!(!config.arrows);
        assert!(!config.pagination);
    }

    #[test]
    fn test_parses_full_attribute_set() {
        let mut el = Element::new("vitrine-slider");
        el.set_attr("data-desktop-per-page", "3");
        el.set_attr("data-mobile-per-page", "1");
        el.set_attr("data-slide-type", "slide");
        el.set_attr("data-gap", "16");
        el.set_attr("data-padding", "{\"left\":\"1rem\",\"right\":\"2rem\"}");
        el.set_attr("data-interval", "2500");
        el.set_attr("data-autoplay", "true");
        el.set_attr("data-show-arrows", "true");
        el.set_attr("data-show-dots", "true");

        let config = SliderConfig::from_element(&el).unwrap();
        assert_eq!(config.desktop_per_page, 3);
        assert_eq!(config.mobile_per_page, 1);
        assert_eq!(config.slide_type, SlideType::Slide);
        assert_eq!(config.gap, 16);
        assert_eq!(
            config.padding,
            Padding::Edges {
                left: Some("1rem".to_string()),
                right: Some("2rem".to_string()),
            }
        );
        assert_eq!(config.interval_ms, 2500);
        assert!(config.autoplay);
        assert!(config.arrows);
        assert!(config.pagination);
    }

    #[test]
    fn test_uniform_padding_number() {
        let mut el = Element::new("vitrine-slider");
        el.set_attr("data-padding", "24");

        let config = SliderConfig::from_element(&el).unwrap();
        assert_eq!(config.padding, Padding::Uniform(24));
    }

    #[test]
    fn test_malformed_padding_is_a_construction_error() {
        let mut el = Element::new("vitrine-slider");
        el.set_attr("data-padding", "{oops");

        let result = SliderConfig::from_element(&el);
        assert!(matches!(
            result,
            Err(SliderError::Dom(DomError::MalformedJson { ref name, .. }))
                if name == "data-padding"
        ));
    }

    #[test]
    fn test_unknown_slide_type_falls_back_to_loop() {
        let mut el = Element::new("vitrine-slider");
        el.set_attr("data-slide-type", "spin");

        let config = SliderConfig::from_element(&el).unwrap();
        assert_eq!(config.slide_type, SlideType::Loop);
    }

    #[test]
    fn test_engine_options_fixed_start_and_mobile_breakpoint() {
        let mut el = Element::new("vitrine-slider");
        el.set_attr("data-desktop-per-page", "5");
        el.set_attr("data-mobile-per-page", "2");

        let options = SliderConfig::from_element(&el).unwrap().engine_options();
        assert_eq!(options.start, 0);
        assert_eq!(options.per_page, 5);
        assert_eq!(options.per_move, 5);

        let mobile = options.breakpoints.get(&MOBILE_BREAKPOINT_PX).unwrap();
        assert_eq!(mobile.per_page, 2);
        assert_eq!(mobile.per_move, 2);
        assert_eq!(options.breakpoints.len(), 1);
    }
}
