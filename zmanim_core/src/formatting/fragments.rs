//! Ordered text fragments with explicit omission rules.

/// An ordered list of rendered pieces.
///
/// Empty pieces never enter the list, so joining can never produce a
/// dangling separator or an empty placeholder.
#[derive(Debug, Default)]
pub(crate) struct Fragments {
    parts: Vec<String>,
}

impl Fragments {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Appends `text` unless it is empty.
    pub(crate) fn push(&mut self, text: impl Into<String>) {
        let text = text.into();
        if !text.is_empty() {
            self.parts.push(text);
        }
    }

    /// Appends `text` when present and non-empty.
    pub(crate) fn push_opt(&mut self, text: Option<String>) {
        if let Some(text) = text {
            self.push(text);
        }
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub(crate) fn join(&self, separator: &str) -> String {
        self.parts.join(separator)
    }

    pub(crate) fn concat(&self) -> String {
        self.parts.concat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_fragments_are_dropped() {
        let mut fragments = Fragments::new();
        fragments.push("");
        fragments.push_opt(None);
        assert!(fragments.is_empty());

        fragments.push("a");
        fragments.push(String::new());
        fragments.push_opt(Some("b".to_string()));
        assert_eq!(fragments.join(" - "), "a - b");
        assert_eq!(fragments.concat(), "ab");
    }
}
