pub mod availability;
pub mod budget;
pub mod cache;
pub mod config;
pub mod filters;
pub mod location;
pub mod pipeline;
pub mod reputation;
pub mod scoring;
pub mod skills;
pub mod validation;
pub mod weights;

pub use cache::{CacheStats, CachedRun, MatchCache};
pub use config::{MatchingConfig, MissingFactorPolicy};
pub use filters::{FilterDecision, HardFilterResult};
pub use pipeline::{find_matches, MatchOptions, MatchRun, MatchingEngine};
pub use scoring::{combine_scores, evaluate_candidate, CandidateEvaluation, MatchResult};
pub use validation::{validate_profile, validate_request};
pub use weights::{MatchFactor, MatchWeights, DEFAULT_WEIGHTS};
