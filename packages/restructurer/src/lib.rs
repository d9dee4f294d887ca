//! Yoga KB Restructurer - split free-text knowledge records into general
//! information and safety guidance.
//!
//! Each record's `content` is scanned for safety clauses ("Contraindications:",
//! "Precautions:", "Avoid if ...", "Not recommended for ..."). The clauses
//! become `precautions`; the rest of the text becomes `info`. Records without
//! any clause get a fallback precaution.
//!
//! # Example
//!
//! ```
//! use yogakb_restructurer::split_content;
//!
//! let (info, precautions) = split_content(
//!     "Avoid if pregnant or have recent surgery. This pose strengthens the core.",
//! );
//! assert_eq!(info, "This pose strengthens the core.");
//! assert_eq!(precautions, "Avoid if pregnant or have recent surgery.");
//! ```
//!
//! # Architecture
//!
//! - [`splitting`]: Clause rules, fallback strategies and the split engine
//! - [`text`]: Whitespace normalization helpers
//! - [`types`]: Input and output record types
//! - [`io`]: Loading and writing knowledge files
//! - [`restructure`]: Per-record transformation and file-level runs
//! - [`config`]: Constants (fallback messages, keywords, output naming)
//! - [`error`]: Error types and Result alias
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod restructure;
pub mod splitting;
pub mod text;
pub mod types;

// Re-export main functions
pub use restructure::{restructure_file, restructure_record, restructure_records};
pub use splitting::split_content;

// Re-export commonly used items
pub use error::{RestructureError, Result};
pub use splitting::{SplitEngine, SplitResult};
pub use types::{OutputRecord, RestructuredArticle, SourceArticle};
