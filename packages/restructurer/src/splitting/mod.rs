//! Content splitting system for knowledge records.
//!
//! Partitions free text into general information and safety guidance by
//! extracting clauses that start with a known lead phrase
//! (e.g. "Contraindications:", "Avoid if ...").

mod config;
mod engine;
mod registry;
mod strategy;
mod types;

pub use config::create_safety_clause_registry;
pub use engine::{split_content, SplitEngine};
pub use registry::{ClauseRegistry, CompiledRule};
pub use strategy::{FallbackStrategy, KeywordFallback};
pub use types::{ClauseRule, ClauseTerminator, ExtractedClause, SplitResult};
