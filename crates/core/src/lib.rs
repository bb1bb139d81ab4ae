pub mod merge;
pub mod normalize;
pub mod tokens;
pub mod types;

// Re-export commonly used types
pub use merge::{merge_tokens, merge_tokens_with_report, value_kind, MergeReport};
pub use normalize::normalize_classes;
pub use tokens::{TokenCategory, TokenMap, TokenTable, Typography};
pub use types::{Declaration, Diagnostic, DiagnosticLevel, UtilityFamily, UtilitySet};
