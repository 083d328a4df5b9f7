/// Class tokens applied to the control, kept exactly as they were given.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList {
    raw: String,
}

impl ClassList {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The class attribute text, verbatim.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.raw.split_ascii_whitespace()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.iter().any(|t| t == token)
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    pub(crate) fn set(&mut self, raw: &str) {
        raw.clone_into(&mut self.raw);
    }

    pub(crate) fn clear(&mut self) {
        self.raw.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_text_verbatim_and_splits_tokens() {
        let list = ClassList::new(" field-error  wide ");
        assert_eq!(list.as_str(), " field-error  wide ");
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["field-error", "wide"]);
        assert!(list.contains("wide"));
        assert!(!list.contains("field"));
    }

    #[test]
    fn whitespace_only_is_empty() {
        assert!(ClassList::new("   ").is_empty());
        assert!(ClassList::default().is_empty());
    }
}
