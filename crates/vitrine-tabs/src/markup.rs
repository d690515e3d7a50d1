//! Rendered panel markup
//!
//! A loaded panel is rewritten as a nested slider element wrapping the
//! rendered product items, so the slider picks the panel up on the next
//! upgrade pass.

use vitrine_slider::{ELEMENT_TAG, LIST_CLASS, TRACK_CLASS};

pub(crate) fn carousel_markup(items: &str) -> String {
    format!(
        "<{tag} data-gap=\"6\" data-show-arrows=\"true\" data-show-dots=\"true\" \
         class=\"carousel\" aria-label=\"Product carousel\">\
         <div class=\"{track}\"><ul class=\"{list}\">{items}</ul></div>\
         </{tag}>",
        tag = ELEMENT_TAG,
        track = TRACK_CLASS,
        list = LIST_CLASS,
    )
}
