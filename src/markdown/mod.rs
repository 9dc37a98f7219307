//! Rich-text rendering for member descriptions.
//!
//! Descriptions are user-written markdown. They are converted with comrak and then run
//! through ammonia; only the sanitized output may reach a page unescaped.

use std::fmt;

use comrak::{markdown_to_html, Options};
use serde::{Serialize, Serializer};

/// HTML that has been through the sanitizer.
///
/// Only [`render_description`] can produce a non-empty value, so templates insert it as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedHtml(String);

impl SanitizedHtml {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SanitizedHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for SanitizedHtml {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Marked safe so the template engine skips auto-escaping.
        minijinja::Value::from_safe_string(self.0.clone()).serialize(serializer)
    }
}

/// Render a markdown description to sanitized HTML.
pub fn render_description(source: &str) -> SanitizedHtml {
    if source.is_empty() {
        return SanitizedHtml(String::new());
    }

    let mut options = Options::default();
    options.extension.autolink = true;
    options.extension.strikethrough = true;
    options.render.hardbreaks = true;
    // Raw HTML is kept here and stripped by the sanitizer.
    options.render.unsafe_ = true;

    let html = markdown_to_html(source, &options);
    SanitizedHtml(ammonia::clean(&html))
}
