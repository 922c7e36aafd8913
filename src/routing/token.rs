//! Template tokens.
//!
//! Offsets are character offsets into the reconstructed template
//! (path, then query string, then hash) and are inclusive at both ends.

/// One piece of a template: literal text or a named placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Literal text the url must contain.
    Exact { text: String, start: usize, stop: usize },
    /// A `{id}` placeholder whose value is taken from the url.
    Variable { id: String, start: usize, stop: usize },
}

impl Token {
    /// Literal token starting at `start`.
    ///
    /// `text` must not be empty: this is checked in debug builds, and release
    /// builds treat empty text as one character wide.
    pub fn exact(text: impl Into<String>, start: usize) -> Self {
        let text = text.into();
        debug_assert!(!text.is_empty(), "exact token at {} has no text", start);
        let stop = start + text.chars().count().saturating_sub(1);
        Token::Exact { text, start, stop }
    }

    /// Placeholder token starting at `start` and spanning `width` characters
    /// of template text (braces included).
    ///
    /// `width` must be at least 1, checked in debug builds like [`Token::exact`].
    pub fn variable(id: impl Into<String>, start: usize, width: usize) -> Self {
        debug_assert!(width > 0, "variable token at {} has zero width", start);
        Token::Variable {
            id: id.into(),
            start,
            stop: start + width.saturating_sub(1),
        }
    }

    pub fn start(&self) -> usize {
        match self {
            Token::Exact { start, .. } | Token::Variable { start, .. } => *start,
        }
    }

    pub fn stop(&self) -> usize {
        match self {
            Token::Exact { stop, .. } | Token::Variable { stop, .. } => *stop,
        }
    }

    /// Number of template characters this token covers.
    pub fn len(&self) -> usize {
        self.stop() - self.start() + 1
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Token::Variable { .. })
    }

    /// The literal text, for exact tokens.
    pub fn text(&self) -> Option<&str> {
        match self {
            Token::Exact { text, .. } => Some(text),
            Token::Variable { .. } => None,
        }
    }

    /// The placeholder id, for variable tokens.
    pub fn id(&self) -> Option<&str> {
        match self {
            Token::Variable { id, .. } => Some(id),
            Token::Exact { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "has no text")]
    fn test_empty_exact_rejected() {
        let _ = Token::exact("", 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "zero width")]
    fn test_zero_width_variable_rejected() {
        let _ = Token::variable("id", 0, 0);
    }

    #[test]
    fn test_exact_offsets() {
        let token = Token::exact("/path1", 10);
        assert_eq!(token.start(), 10);
        assert_eq!(token.stop(), 15);
        assert_eq!(token.len(), 6);
        assert_eq!(token.text(), Some("/path1"));
        assert!(!token.is_variable());
    }

    #[test]
    fn test_exact_counts_characters() {
        let token = Token::exact("/café", 0);
        assert_eq!(token.len(), 5);
        assert_eq!(token.stop(), 4);
    }

    #[test]
    fn test_variable_offsets() {
        let token = Token::variable("var", 7, "{var}".len());
        assert_eq!(token.start(), 7);
        assert_eq!(token.stop(), 11);
        assert_eq!(token.id(), Some("var"));
        assert_eq!(token.text(), None);
        assert!(token.is_variable());
    }
}
