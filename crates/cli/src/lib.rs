pub mod build;
pub mod explain;
pub mod summary;

pub use build::{run_build, write_if_changed, BuildOptions, BuildOutcome};
pub use explain::{explain, Explanation};
pub use summary::TokenSummary;
