use tracing::debug;

use super::{
    experience::match_experience,
    qualification::{match_qualification, qualification_level},
    skills::evaluate_skills,
    weights::{Weights, DEFAULT_WEIGHTS},
};
use crate::{CandidateProfile, JobRequirement};

#[derive(Debug, Clone)]
pub struct MatchingConfig {
    pub weights: Weights,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            weights: DEFAULT_WEIGHTS,
        }
    }
}

/// 項目別スコア
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringResult {
    pub score: f64,
    pub status: &'static str,
    pub details: String,
}

/// 総合スコアと内訳
#[derive(Debug, Clone, PartialEq)]
pub struct MatchScore {
    pub overall: f64,
    pub skills: ScoringResult,
    pub experience: ScoringResult,
    pub qualification: ScoringResult,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

fn status_from_score(score: f64) -> &'static str {
    if score >= 1.0 {
        "PERFECT_MATCH"
    } else if score >= 0.7 {
        "MATCH"
    } else if score > 0.0 {
        "PARTIAL_MATCH"
    } else {
        "MISS"
    }
}

pub struct ScoringEngine {
    config: MatchingConfig,
}

impl ScoringEngine {
    pub fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    /// 総合スコア計算
    ///
    /// 重みは `Weights::normalized` を通してから合成する。サブスコアは
    /// いずれも [0,1] のため、総合も [0,1] に収まる。
    pub fn calculate_match_score(
        &self,
        candidate: &CandidateProfile,
        job: &JobRequirement,
    ) -> MatchScore {
        let skills_eval = evaluate_skills(candidate, job);
        let experience_score = match_experience(candidate, job);
        let qualification_score = match_qualification(candidate, job);

        let weights = self.config.weights.normalized();
        let overall = skills_eval.score * weights.skills
            + experience_score * weights.experience
            + qualification_score * weights.qualification;

        debug!(
            overall,
            skills = skills_eval.score,
            experience = experience_score,
            qualification = qualification_score,
            job = %job.title,
            candidate = %candidate.name,
            "match score calculated"
        );

        let experience_details = if job.required_experience_years == 0.0 {
            "no experience requirement".to_string()
        } else {
            format!(
                "{:.1} years against {:.1} required",
                candidate.experience_years, job.required_experience_years
            )
        };

        let qualification_details = format!(
            "qualification level {} against required level {}",
            qualification_level(candidate.qualification.as_deref()),
            qualification_level(job.required_qualification.as_deref())
        );

        MatchScore {
            overall,
            skills: ScoringResult {
                score: skills_eval.score,
                status: status_from_score(skills_eval.score),
                details: skills_eval.reason.clone(),
            },
            experience: ScoringResult {
                score: experience_score,
                status: status_from_score(experience_score),
                details: experience_details,
            },
            qualification: ScoringResult {
                score: qualification_score,
                status: status_from_score(qualification_score),
                details: qualification_details,
            },
            matched_skills: skills_eval.matched,
            missing_skills: skills_eval.missing,
        }
    }
}

/// 総合スコアと各サブスコアの4値タプルを返す互換API
/// (overall, skills, experience, qualification)
pub fn calculate_overall_score(
    candidate: &CandidateProfile,
    job: &JobRequirement,
) -> (f64, f64, f64, f64) {
    let score = ScoringEngine::new(MatchingConfig::default()).calculate_match_score(candidate, job);
    (
        score.overall,
        score.skills.score,
        score.experience.score,
        score.qualification.score,
    )
}
