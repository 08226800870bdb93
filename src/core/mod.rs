// Core algorithm exports
pub mod filters;
pub mod interests;
pub mod matcher;
pub mod scoring;

pub use filters::is_eligible_candidate;
pub use interests::{interest_set, jaccard_index, shared_interests};
pub use matcher::{MatchResult, Matcher};
pub use scoring::calculate_compatibility;
