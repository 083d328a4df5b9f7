use crate::HostError;
use std::collections::HashMap;

// Reserved by HTML even though they match the custom element grammar.
const RESERVED_NAMES: [&str; 8] = [
    "annotation-xml",
    "color-profile",
    "font-face",
    "font-face-src",
    "font-face-uri",
    "font-face-format",
    "font-face-name",
    "missing-glyph",
];

#[derive(Clone, Debug)]
struct Definition {
    observed: Vec<String>,
}

/// Tag name -> element definition. A tag can be defined once.
#[derive(Clone, Debug, Default)]
pub struct ElementRegistry {
    definitions: HashMap<String, Definition>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define(&mut self, tag: &str, observed: &[&str]) -> Result<(), HostError> {
        if !is_valid_element_name(tag) {
            return Err(HostError::InvalidName(tag.to_string()));
        }
        if self.definitions.contains_key(tag) {
            return Err(HostError::AlreadyDefined(tag.to_string()));
        }
        let observed = observed.iter().map(|a| a.to_ascii_lowercase()).collect();
        self.definitions.insert(tag.to_string(), Definition { observed });
        log::debug!(target: "platform.registry", "defined <{tag}>");
        Ok(())
    }

    pub fn is_defined(&self, tag: &str) -> bool {
        self.definitions.contains_key(tag)
    }

    pub fn observed(&self, tag: &str) -> Option<&[String]> {
        self.definitions.get(tag).map(|d| d.observed.as_slice())
    }

    pub fn observes(&self, tag: &str, attr: &str) -> bool {
        self.observed(tag)
            .is_some_and(|names| names.iter().any(|n| n.eq_ignore_ascii_case(attr)))
    }
}

/// Valid custom element name: starts with a lowercase ASCII letter, contains a
/// hyphen, uses only `[a-z0-9._-]`, and is not reserved.
pub fn is_valid_element_name(tag: &str) -> bool {
    let Some(first) = tag.chars().next() else {
        return false;
    };
    first.is_ascii_lowercase()
        && tag.contains('-')
        && tag
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '.' | '_'))
        && !RESERVED_NAMES.contains(&tag)
}
