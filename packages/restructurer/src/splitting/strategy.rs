//! Fallback strategies for content without explicit safety clauses.

use crate::config::{GENERAL_FALLBACK, PREGNANCY_FALLBACK, PREGNANCY_KEYWORDS};
use crate::text::contains_any_ignore_case;

/// Trait for choosing the precaution text when no clause was extracted.
///
/// Implementations must be pure: the answer depends only on the original
/// content, so the splitter stays safe to call from many threads.
pub trait FallbackStrategy {
    /// Return the fallback precaution for `content`. Must not be empty.
    fn fallback_for(&self, content: &str) -> &str;
}

/// Keyword-driven fallback.
///
/// If the content mentions any keyword (case-insensitive), the keyword
/// message is returned, otherwise the default message.
#[derive(Debug, Clone)]
pub struct KeywordFallback {
    keywords: Vec<String>,
    keyword_message: String,
    default_message: String,
}

impl KeywordFallback {
    /// Create a fallback with custom keywords and messages.
    #[must_use]
    pub fn new(
        keywords: impl IntoIterator<Item = impl Into<String>>,
        keyword_message: impl Into<String>,
        default_message: impl Into<String>,
    ) -> Self {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
            keyword_message: keyword_message.into(),
            default_message: default_message.into(),
        }
    }

    /// Check whether the content triggers the keyword message.
    #[must_use]
    pub fn matches(&self, content: &str) -> bool {
        let needles: Vec<&str> = self.keywords.iter().map(String::as_str).collect();
        contains_any_ignore_case(content, &needles)
    }
}

impl Default for KeywordFallback {
    fn default() -> Self {
        Self::new(PREGNANCY_KEYWORDS, PREGNANCY_FALLBACK, GENERAL_FALLBACK)
    }
}

impl FallbackStrategy for KeywordFallback {
    fn fallback_for(&self, content: &str) -> &str {
        if self.matches(content) {
            &self.keyword_message
        } else {
            &self.default_message
        }
    }
}
