//! Configuration constants for the restructurer.

/// Fallback precaution used when the content mentions pregnancy but has no
/// explicit safety clause.
pub const PREGNANCY_FALLBACK: &str =
    "Consult a healthcare provider before practicing if you have any medical conditions.";

/// Fallback precaution used for every other record without a safety clause.
pub const GENERAL_FALLBACK: &str =
    "Practice under guidance if you are a beginner. Stop if you experience pain or discomfort.";

/// Keywords that select [`PREGNANCY_FALLBACK`], matched case-insensitively.
///
/// "pregnant" is not a substring of "pregnancy", so both are listed.
pub const PREGNANCY_KEYWORDS: [&str; 2] = ["pregnant", "pregnancy"];

/// Suffix appended to the input file stem to form the default output name.
pub const OUTPUT_SUFFIX: &str = "_restructured";

/// Name of the record field that holds the free text.
pub const CONTENT_FIELD: &str = "content";
