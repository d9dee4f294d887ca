//! Types for the content splitting system.

use std::ops::Range;

/// Where a safety clause ends once its lead phrase has matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClauseTerminator {
    /// Stop at the first period or at the end of the text.
    #[default]
    Sentence,
    /// Stop at the first line break or at the end of the text.
    Line,
}

impl ClauseTerminator {
    /// Regex fragment that closes the clause.
    #[must_use]
    pub fn as_pattern(self) -> &'static str {
        match self {
            Self::Sentence => r"(?:\.|$)",
            Self::Line => r"(?:\n|$)",
        }
    }
}

/// Declarative specification of one kind of safety clause.
///
/// A clause starts with a lead phrase and runs, non-greedily, to the
/// terminator. Matching is case-insensitive and may span line breaks.
#[derive(Debug, Clone)]
pub struct ClauseRule {
    /// Short name for the clause kind (e.g. "contraindication").
    pub label: String,

    /// Regex fragment matching the lead phrase, e.g. `Precautions?:\s*`.
    pub lead: String,

    /// How the clause is terminated.
    pub terminator: ClauseTerminator,
}

impl ClauseRule {
    /// Create a new rule with the default sentence terminator.
    #[must_use]
    pub fn new(label: impl Into<String>, lead: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            lead: lead.into(),
            terminator: ClauseTerminator::default(),
        }
    }

    /// Set the terminator policy.
    #[must_use]
    pub fn with_terminator(mut self, terminator: ClauseTerminator) -> Self {
        self.terminator = terminator;
        self
    }

    /// Full regex source for this rule.
    #[must_use]
    pub fn pattern(&self) -> String {
        format!("(?is){}(.+?){}", self.lead, self.terminator.as_pattern())
    }
}

/// A safety clause found in the content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedClause {
    /// Label of the rule that matched.
    pub label: String,

    /// The matched span, lead phrase included.
    pub text: String,

    /// Byte offset of the span start in the original content.
    pub start: usize,

    /// Byte offset one past the span end in the original content.
    pub end: usize,
}

impl ExtractedClause {
    /// Byte range of the clause in the original content.
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Check whether `other` lies entirely within this clause.
    #[must_use]
    pub fn contains(&self, other: &Range<usize>) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

/// Outcome of splitting one block of content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitResult {
    /// Content with all safety clauses removed, whitespace-normalized.
    pub info: String,

    /// Space-joined safety clauses, or a fallback statement. Never empty.
    pub precautions: String,

    /// Clauses in the order they were found (rule order, then position).
    pub clauses: Vec<ExtractedClause>,

    /// Whether `precautions` came from the fallback strategy.
    pub used_fallback: bool,
}

impl SplitResult {
    /// Consume the result into the `(info, precautions)` pair.
    #[must_use]
    pub fn into_pair(self) -> (String, String) {
        (self.info, self.precautions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clause_rule_builder() {
        let rule = ClauseRule::new("precaution", r"Precautions?:\s*")
            .with_terminator(ClauseTerminator::Line);

        assert_eq!(rule.label, "precaution");
        assert_eq!(rule.lead, r"Precautions?:\s*");
        assert_eq!(rule.terminator, ClauseTerminator::Line);
    }

    #[test]
    fn test_clause_rule_pattern_sentence() {
        let rule = ClauseRule::new("avoid", "Avoid if ");
        assert_eq!(rule.pattern(), r"(?is)Avoid if (.+?)(?:\.|$)");
    }

    #[test]
    fn test_clause_rule_pattern_line() {
        let rule = ClauseRule::new("avoid", "Avoid if ").with_terminator(ClauseTerminator::Line);
        assert_eq!(rule.pattern(), r"(?is)Avoid if (.+?)(?:\n|$)");
    }

    #[test]
    fn test_extracted_clause_contains() {
        let clause = ExtractedClause {
            label: "x".to_string(),
            text: "abcde".to_string(),
            start: 10,
            end: 15,
        };
        assert!(clause.contains(&(10..15)));
        assert!(clause.contains(&(11..13)));
        assert!(!clause.contains(&(12..20)));
        assert!(!clause.contains(&(0..11)));
        assert!(!clause.contains(&(5..20)));
        assert!(!clause.contains(&(15..20)));
        assert_eq!(clause.span(), 10..15);
    }
}
