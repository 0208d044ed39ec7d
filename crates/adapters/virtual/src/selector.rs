//! Compound selector subset understood by [`VirtualDocument`](crate::VirtualDocument).
//!
//! Supports an optional tag followed by any number of `#id` and `.class`
//! parts (`div.alert.alert-success`, `#theme-toggle`, `.theme-toggle-icon`).
//! Combinators and attribute selectors are not supported.

/// A parsed compound selector.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

fn is_marker(c: char) -> bool {
    c == '#' || c == '.'
}

impl Selector {
    /// Parse `input`, `None` if it uses unsupported syntax.
    pub(crate) fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() || input.contains(char::is_whitespace) {
            return None;
        }

        let mut selector = Self::default();
        let tag_end = input.find(is_marker).unwrap_or(input.len());
        if tag_end > 0 {
            selector.tag = Some(input[..tag_end].to_ascii_lowercase());
        }

        let mut rest = &input[tag_end..];
        while let Some(marker) = rest.chars().next() {
            let body = &rest[marker.len_utf8()..];
            let end = body.find(is_marker).unwrap_or(body.len());
            let name = &body[..end];
            if name.is_empty() {
                return None;
            }
            match marker {
                '#' => {
                    if selector.id.replace(name.to_string()).is_some() {
                        return None;
                    }
                }
                _ => selector.classes.push(name.to_string()),
            }
            rest = &body[end..];
        }
        Some(selector)
    }

    /// Whether an element with the given tag, `id`, and `class` attribute matches.
    pub(crate) fn matches(&self, tag: &str, id: Option<&str>, class: Option<&str>) -> bool {
        if self.tag.as_deref().is_some_and(|t| !t.eq_ignore_ascii_case(tag)) {
            return false;
        }
        if self.id.is_some() && self.id.as_deref() != id {
            return false;
        }
        let class = class.unwrap_or_default();
        self.classes
            .iter()
            .all(|wanted| class.split_whitespace().any(|c| c == wanted))
    }
}
