//! Core data types for knowledge records.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Deserialize a present field as `Some`, even when its value is `null`.
///
/// Combined with `#[serde(default)]` this keeps "absent" and "null" apart.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Typed view of an input record that carries free-text content.
///
/// The metadata fields are opaque: they are copied to the output verbatim
/// and never inspected.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceArticle {
    #[serde(default, deserialize_with = "present")]
    pub id: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub source: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub page: Option<Value>,
    pub content: String,
}

/// A record split into general information and safety guidance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestructuredArticle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<Value>,
    pub info: String,
    pub precautions: String,
}

impl RestructuredArticle {
    /// Build the output record from a source article and its split text.
    #[must_use]
    pub fn from_source(article: SourceArticle, info: String, precautions: String) -> Self {
        Self {
            id: article.id,
            title: article.title,
            source: article.source,
            page: article.page,
            info,
            precautions,
        }
    }
}

/// One record of the output sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OutputRecord {
    /// Record whose content was split.
    Restructured(RestructuredArticle),
    /// Record forwarded unchanged.
    PassThrough(Value),
}

impl OutputRecord {
    #[must_use]
    pub fn is_pass_through(&self) -> bool {
        matches!(self, Self::PassThrough(_))
    }
}
