pub mod experience;
pub mod qualification;
pub mod scoring;
pub mod skills;
pub mod weights;

pub use experience::match_experience;
pub use qualification::{match_qualification, qualification_level, QUALIFICATION_LEVELS};
pub use scoring::{
    calculate_overall_score, MatchScore, MatchingConfig, ScoringEngine, ScoringResult,
};
pub use skills::{evaluate_skills, match_skills, SkillMatchResult};
pub use weights::{Weights, DEFAULT_WEIGHTS};
