//! Split engine that partitions content into info and precautions.

use std::ops::Range;
use std::sync::LazyLock;

use super::config::create_safety_clause_registry;
use super::registry::ClauseRegistry;
use super::strategy::{FallbackStrategy, KeywordFallback};
use super::types::{ExtractedClause, SplitResult};
use crate::text::normalize_whitespace;

/// Engine that extracts safety clauses from free text.
///
/// Every rule in the registry is matched against the original content.
/// Clauses are collected in rule order, then by position; a match that lies
/// entirely inside an already collected clause is dropped. `info` is built by
/// excising the union of all clause spans, so duplicate text elsewhere in the
/// content is untouched.
#[derive(Debug, Clone)]
pub struct SplitEngine<S: FallbackStrategy> {
    registry: ClauseRegistry,
    strategy: S,
}

impl<S: FallbackStrategy> SplitEngine<S> {
    /// Create a new split engine.
    #[must_use]
    pub fn new(registry: ClauseRegistry, strategy: S) -> Self {
        Self { registry, strategy }
    }

    /// Split content into info and precautions.
    pub fn split(&self, content: &str) -> SplitResult {
        let clauses = self.extract_clauses(content);
        let info = normalize_whitespace(&excise_spans(content, &clauses));

        // A clause that runs to the end of the text may carry trailing whitespace
        let joined = clauses
            .iter()
            .map(|c| c.text.trim_end())
            .collect::<Vec<_>>()
            .join(" ");
        let mut precautions = joined.trim().to_string();

        let used_fallback = precautions.is_empty();
        if used_fallback {
            precautions = self.strategy.fallback_for(content).to_string();
        }

        SplitResult {
            info,
            precautions,
            clauses,
            used_fallback,
        }
    }

    /// Collect clauses in rule order, then by position.
    fn extract_clauses(&self, content: &str) -> Vec<ExtractedClause> {
        let mut found: Vec<ExtractedClause> = Vec::new();

        for compiled in self.registry.rules() {
            for m in compiled.regex.find_iter(content) {
                let span = m.range();
                if found.iter().any(|c| c.contains(&span)) {
                    tracing::debug!(
                        rule = %compiled.rule.label,
                        start = span.start,
                        end = span.end,
                        "Clause lies inside an earlier match, skipping"
                    );
                    continue;
                }

                found.push(ExtractedClause {
                    label: compiled.rule.label.clone(),
                    text: m.as_str().to_string(),
                    start: span.start,
                    end: span.end,
                });
            }
        }

        found
    }
}

impl Default for SplitEngine<KeywordFallback> {
    fn default() -> Self {
        Self::new(create_safety_clause_registry(), KeywordFallback::default())
    }
}

/// Remove the union of the clause spans from `content`.
///
/// Spans may overlap.
fn excise_spans(content: &str, clauses: &[ExtractedClause]) -> String {
    let mut spans: Vec<Range<usize>> = clauses.iter().map(ExtractedClause::span).collect();
    spans.sort_by_key(|s| s.start);

    let mut remainder = String::with_capacity(content.len());
    let mut cursor = 0;
    for span in spans {
        if span.start > cursor {
            remainder.push_str(&content[cursor..span.start]);
        }
        cursor = cursor.max(span.end);
    }
    remainder.push_str(&content[cursor..]);
    remainder
}

static DEFAULT_ENGINE: LazyLock<SplitEngine<KeywordFallback>> =
    LazyLock::new(SplitEngine::default);

/// Split content with the built-in safety clause rules.
///
/// # Examples
/// ```
/// use yogakb_restructurer::splitting::split_content;
///
/// let (info, precautions) =
///     split_content("Do this pose daily. Contraindications: high blood pressure.");
/// assert_eq!(info, "Do this pose daily.");
/// assert_eq!(precautions, "Contraindications: high blood pressure.");
/// ```
pub fn split_content(content: &str) -> (String, String) {
    DEFAULT_ENGINE.split(content).into_pair()
}
