//! Typed attribute readers
//!
//! Declarative configuration arrives as string attributes. Missing or
//! unparseable numbers and flags silently take their documented default;
//! JSON-valued attributes are the exception and fail loudly, since a typo in
//! structured configuration should not be papered over with a default.

use serde::de::DeserializeOwned;

use crate::element::Element;
use crate::error::DomError;
use crate::Result;

/// String attribute with a default for absent values.
pub fn string_or(el: &Element, name: &str, default: &str) -> String {
    el.attr(name).unwrap_or(default).to_string()
}

/// Unsigned integer attribute; absent or unparseable values take the default.
pub fn uint_or(el: &Element, name: &str, default: u32) -> u32 {
    el.attr(name)
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

/// Boolean flag attribute; true only for the literal string `"true"`.
pub fn flag(el: &Element, name: &str) -> bool {
    el.attr(name).map(|value| value == "true").unwrap_or(false)
}

/// JSON attribute. Absent is fine; present-but-malformed is an error.
pub fn json_opt<T: DeserializeOwned>(el: &Element, name: &str) -> Result<Option<T>> {
    match el.attr(name) {
        None => Ok(None),
        Some(raw) => serde_json::from_str(raw)
            .map(Some)
            .map_err(|source| DomError::MalformedJson {
                name: name.to_string(),
                source,
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element_with(name: &str, value: &str) -> Element {
        let mut el = Element::new("div");
        el.set_attr(name, value);
        el
    }

    #[test]
    fn test_uint_defaults_on_missing_and_garbage() {
        let el = Element::new("div");
        assert_eq!(uint_or(&el, "data-gap", 4), 4);

        let el = element_with("data-gap", "12");
        assert_eq!(uint_or(&el, "data-gap", 4), 12);

        let el = element_with("data-gap", "not-a-number");
        assert_eq!(uint_or(&el, "data-gap", 4), 4);
    }

    #[test]
    fn test_flag_requires_literal_true() {
        assert!(flag(&element_with("data-autoplay", "true"), "data-autoplay"));
        assert!(!flag(&element_with("data-autoplay", "TRUE"), "data-autoplay"));
        assert!(!flag(&element_with("data-autoplay", "1"), "data-autoplay"));
        assert!(!flag(&Element::new("div"), "data-autoplay"));
    }

    #[test]
    fn test_json_absent_is_none() {
        let value: Option<u32> = json_opt(&Element::new("div"), "data-padding").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_json_malformed_is_loud() {
        let el = element_with("data-padding", "{broken");
        let result: Result<Option<serde_json::Value>> = json_opt(&el, "data-padding");
        assert!(matches!(
            result,
            Err(DomError::MalformedJson { ref name, .. }) if name == "data-padding"
        ));
    }

    #[test]
    fn test_string_or() {
        assert_eq!(string_or(&Element::new("div"), "data-slide-type", "loop"), "loop");
        assert_eq!(
            string_or(&element_with("data-slide-type", "fade"), "data-slide-type", "loop"),
            "fade"
        );
    }
}
