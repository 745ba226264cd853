// src/infrastructure/sanitizer.rs
use std::collections::HashSet;

use ammonia::Builder;

use crate::application::ports::sanitizer::HtmlSanitizer;

const CLASS_TAGS: [&str; 9] = ["p", "h1", "h2", "h3", "h4", "h5", "h6", "div", "span"];
const STYLE_TAGS: [&str; 8] = ["span", "p", "h1", "h2", "h3", "h4", "h5", "h6"];
const ALLOWED_CLASSES: [&str; 5] = [
    "text-align-left",
    "text-align-center",
    "text-align-right",
    "text-align-justify",
    "tiptap",
];

/// User-generated-content policy for article bodies.
///
/// Starts from ammonia's defaults and additionally admits editor alignment
/// classes and inline styles on text blocks. A `class` attribute survives
/// only when its whole value is one allowed class.
pub struct AmmoniaSanitizer {
    builder: Builder<'static>,
}

impl AmmoniaSanitizer {
    pub fn new() -> Self {
        let mut builder = Builder::default();
        for tag in CLASS_TAGS {
            builder.add_tag_attributes(tag, ["class"]);
        }
        for tag in STYLE_TAGS {
            builder.add_tag_attributes(tag, ["style"]);
        }
        builder.attribute_filter(|_element, attribute, value| {
            if attribute == "class" && !ALLOWED_CLASSES.contains(&value) {
                None
            } else {
                Some(value.into())
            }
        });
        builder.link_rel(Some("noopener noreferrer"));
        builder.clean_content_tags(HashSet::from(["script", "style"]));
        Self { builder }
    }
}

impl Default for AmmoniaSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlSanitizer for AmmoniaSanitizer {
    fn sanitize(&self, html: &str) -> String {
        self.builder.clean(html).to_string()
    }
}
