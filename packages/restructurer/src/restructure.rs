//! Record transformer that ties loading, splitting and writing together.

use std::path::Path;

use rayon::prelude::*;
use serde::Deserialize;
use serde_json::Value;

use crate::config::CONTENT_FIELD;
use crate::error::Result;
use crate::io::{load_records, write_records};
use crate::splitting::{FallbackStrategy, KeywordFallback, SplitEngine};
use crate::types::{OutputRecord, RestructuredArticle, SourceArticle};

/// What happened to a single record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Content was split. `clauses` is the number of extracted clauses.
    Restructured { clauses: usize, used_fallback: bool },
    /// Record was forwarded unchanged.
    PassThrough,
}

/// Counts for one restructuring run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RestructureSummary {
    pub total: usize,
    pub restructured: usize,
    pub passed_through: usize,
    /// Restructured records with at least one extracted clause.
    pub with_clauses: usize,
    /// Restructured records whose precautions came from the fallback.
    pub with_fallback: usize,
}

impl RestructureSummary {
    fn record(&mut self, outcome: RecordOutcome) {
        self.total += 1;
        match outcome {
            RecordOutcome::Restructured {
                clauses,
                used_fallback,
            } => {
                self.restructured += 1;
                if clauses > 0 {
                    self.with_clauses += 1;
                }
                if used_fallback {
                    self.with_fallback += 1;
                }
            }
            RecordOutcome::PassThrough => self.passed_through += 1,
        }
    }
}

/// Output of [`restructure_records`].
#[derive(Debug, Clone)]
pub struct Restructured {
    /// Output records, in input order.
    pub records: Vec<OutputRecord>,
    pub summary: RestructureSummary,
}

/// Transform one input record.
///
/// Records without a `content` key, and anything that is not a JSON object,
/// are passed through unchanged. A `content` value that is not a string is
/// also passed through, with a warning.
pub fn restructure_record<S: FallbackStrategy>(
    record: Value,
    engine: &SplitEngine<S>,
) -> (OutputRecord, RecordOutcome) {
    let has_content = record
        .as_object()
        .is_some_and(|fields| fields.contains_key(CONTENT_FIELD));
    if !has_content {
        return (
            OutputRecord::PassThrough(record),
            RecordOutcome::PassThrough,
        );
    }

    let article = match SourceArticle::deserialize(&record) {
        Ok(article) => article,
        Err(e) => {
            let id = record.get("id").cloned().unwrap_or_default();
            tracing::warn!(
                %id,
                error = %e,
                "Record content is not text, passing through unchanged"
            );
            return (
                OutputRecord::PassThrough(record),
                RecordOutcome::PassThrough,
            );
        }
    };

    let result = engine.split(&article.content);
    let outcome = RecordOutcome::Restructured {
        clauses: result.clauses.len(),
        used_fallback: result.used_fallback,
    };
    let restructured = RestructuredArticle::from_source(article, result.info, result.precautions);

    (OutputRecord::Restructured(restructured), outcome)
}

/// Transform a sequence of records, preserving order.
///
/// When `parallel` is set the records are split on the rayon thread pool;
/// the output order is still the input order.
pub fn restructure_records<S>(
    records: Vec<Value>,
    engine: &SplitEngine<S>,
    parallel: bool,
) -> Restructured
where
    S: FallbackStrategy + Sync,
{
    restructure_records_with(records, engine, parallel, || {})
}

/// Like [`restructure_records`], calling `on_record` after each record.
pub fn restructure_records_with<S, F>(
    records: Vec<Value>,
    engine: &SplitEngine<S>,
    parallel: bool,
    on_record: F,
) -> Restructured
where
    S: FallbackStrategy + Sync,
    F: Fn() + Sync,
{
    let transform = |record: Value| {
        let out = restructure_record(record, engine);
        on_record();
        out
    };

    let results: Vec<(OutputRecord, RecordOutcome)> = if parallel {
        records.into_par_iter().map(transform).collect()
    } else {
        records.into_iter().map(transform).collect()
    };

    let mut summary = RestructureSummary::default();
    let mut out = Vec::with_capacity(results.len());
    for (index, (record, outcome)) in results.into_iter().enumerate() {
        tracing::debug!(index, ?outcome, "Processed record");
        summary.record(outcome);
        out.push(record);
    }

    Restructured {
        records: out,
        summary,
    }
}

/// Restructure a knowledge file with the built-in safety clause rules.
///
/// # Arguments
/// * `input` - JSON file holding an array of records
/// * `output` - Destination file; its directory must exist
/// * `parallel` - Split records on the rayon thread pool
pub fn restructure_file(input: &Path, output: &Path, parallel: bool) -> Result<RestructureSummary> {
    restructure_file_with(input, output, parallel, |_| {})
}

/// Like [`restructure_file`], calling `on_record` after each record with the
/// total number of records in the file.
pub fn restructure_file_with<F>(
    input: &Path,
    output: &Path,
    parallel: bool,
    on_record: F,
) -> Result<RestructureSummary>
where
    F: Fn(usize) + Sync,
{
    let records = load_records(input)?;
    let engine: SplitEngine<KeywordFallback> = SplitEngine::default();

    let total = records.len();
    let Restructured { records, summary } =
        restructure_records_with(records, &engine, parallel, || on_record(total));
    write_records(output, &records)?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        total = summary.total,
        restructured = summary.restructured,
        passed_through = summary.passed_through,
        "Restructured knowledge file"
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GENERAL_FALLBACK, PREGNANCY_FALLBACK};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn engine() -> SplitEngine<KeywordFallback> {
        SplitEngine::default()
    }

    #[test]
    fn test_restructure_record_splits_content() {
        let record = json!({
            "id": "bhujangasana",
            "title": "Cobra Pose",
            "source": "asanas.pdf",
            "page": 4,
            "content": "Lie prone and lift the chest. Contraindications: back injury."
        });

        let (out, outcome) = restructure_record(record, &engine());

        assert_eq!(
            serde_json::to_value(&out).unwrap(),
            json!({
                "id": "bhujangasana",
                "title": "Cobra Pose",
                "source": "asanas.pdf",
                "page": 4,
                "info": "Lie prone and lift the chest.",
                "precautions": "Contraindications: back injury."
            })
        );
        assert_eq!(
            outcome,
            RecordOutcome::Restructured {
                clauses: 1,
                used_fallback: false
            }
        );
    }

    #[test]
    fn test_restructure_record_without_content_passes_through() {
        let record = json!({
            "id": "already-done",
            "title": "Mountain Pose",
            "info": "Stand tall.",
            "precautions": "None."
        });

        let (out, outcome) = restructure_record(record.clone(), &engine());

        assert_eq!(out, OutputRecord::PassThrough(record));
        assert_eq!(outcome, RecordOutcome::PassThrough);
    }

    #[test]
    fn test_restructure_record_non_object_passes_through() {
        let (out, outcome) = restructure_record(json!("stray string"), &engine());

        assert_eq!(out, OutputRecord::PassThrough(json!("stray string")));
        assert_eq!(outcome, RecordOutcome::PassThrough);
    }

    #[test]
    fn test_restructure_record_non_text_content_passes_through() {
        let record = json!({ "id": 3, "content": ["not", "text"] });

        let (out, outcome) = restructure_record(record.clone(), &engine());

        assert_eq!(out, OutputRecord::PassThrough(record));
        assert_eq!(outcome, RecordOutcome::PassThrough);
    }

    #[test]
    fn test_restructure_record_drops_extra_fields() {
        let record = json!({ "id": 1, "content": "Breathe.", "tags": ["calm"] });

        let (out, _) = restructure_record(record, &engine());

        assert_eq!(
            serde_json::to_value(&out).unwrap(),
            json!({ "id": 1, "info": "Breathe.", "precautions": GENERAL_FALLBACK })
        );
    }

    #[test]
    fn test_restructure_records_preserves_order_and_counts() {
        let records = vec![
            json!({ "id": 1, "content": "Twist gently. Avoid if pregnant." }),
            json!({ "id": 2, "info": "kept", "precautions": "kept" }),
            json!({ "id": 3, "content": "A prenatal flow for pregnancy." }),
            json!({ "id": 4, "content": "Sit and breathe." }),
        ];

        let Restructured { records, summary } = restructure_records(records, &engine(), false);

        let ids: Vec<Value> = records
            .iter()
            .map(|r| serde_json::to_value(r).unwrap()["id"].clone())
            .collect();
        assert_eq!(ids, vec![json!(1), json!(2), json!(3), json!(4)]);

        let third = serde_json::to_value(&records[2]).unwrap();
        assert_eq!(third["precautions"], json!(PREGNANCY_FALLBACK));

        assert_eq!(
            summary,
            RestructureSummary {
                total: 4,
                restructured: 3,
                passed_through: 1,
                with_clauses: 1,
                with_fallback: 2,
            }
        );
    }

    #[test]
    fn test_restructure_records_parallel_matches_sequential() {
        let records: Vec<Value> = (0..200)
            .map(|i| {
                if i % 7 == 0 {
                    json!({ "id": i, "note": "no content" })
                } else {
                    let content = format!("Pose {i}. Precautions: step {i} slowly.");
                    json!({ "id": i, "content": content })
                }
            })
            .collect();

        let sequential = restructure_records(records.clone(), &engine(), false);
        let parallel = restructure_records(records, &engine(), true);

        assert_eq!(parallel.records, sequential.records);
        assert_eq!(parallel.summary, sequential.summary);
    }

    #[test]
    fn test_restructure_records_with_callback() {
        let seen = AtomicUsize::new(0);
        let records = vec![json!({ "content": "a" }), json!({ "id": 2 })];

        let _ = restructure_records_with(records, &engine(), true, || {
            seen.fetch_add(1, Ordering::Relaxed);
        });

        assert_eq!(seen.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_restructure_file_with_reports_each_record() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("kb.json");
        let output = dir.path().join("kb_restructured.json");
        std::fs::write(
            &input,
            r#"[{"id": 1, "content": "Sit. Avoid if dizzy."}, {"id": 2}, "stray"]"#,
        )
        .unwrap();

        let seen = AtomicUsize::new(0);
        let summary = restructure_file_with(&input, &output, false, |total| {
            assert_eq!(total, 3);
            seen.fetch_add(1, Ordering::Relaxed);
        })
        .unwrap();

        assert_eq!(seen.load(Ordering::Relaxed), 3);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.restructured, 1);
        assert!(output.exists());
    }

    #[test]
    fn test_restructure_file_missing_output_dir_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("kb.json");
        let output = dir.path().join("missing").join("out.json");
        std::fs::write(&input, r#"[{"content": "Breathe."}]"#).unwrap();

        let err = restructure_file(&input, &output, false).unwrap_err();

        assert!(matches!(err, crate::RestructureError::MissingOutputDir(_)));
        assert!(!output.exists());
    }

    #[test]
    fn test_restructure_records_empty() {
        let result = restructure_records(Vec::new(), &engine(), false);
        assert!(result.records.is_empty());
        assert_eq!(result.summary, RestructureSummary::default());
    }
}
