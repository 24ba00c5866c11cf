use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::matching::{MatchScore, ScoringResult};
use crate::{CandidateProfile, JobRequirement};

/// 採点結果レポート（JSON出力・外部連携向け）
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub job_title: String,
    pub candidate_name: String,
    /// 総合スコア（0.0〜1.0）
    pub overall: f64,
    /// 項目別内訳
    pub breakdown: ScoreBreakdown,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    /// 本文から自動抽出したスキル（PDF入力時のみ）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_skills: Option<Vec<String>>,
    pub engine_version: String,
    pub scored_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreBreakdown {
    pub skills: DimensionScore,
    pub experience: DimensionScore,
    pub qualification: DimensionScore,
}

#[derive(Debug, Clone, Serialize)]
pub struct DimensionScore {
    pub score: f64,
    pub status: String,
    pub details: String,
}

impl From<&ScoringResult> for DimensionScore {
    fn from(result: &ScoringResult) -> Self {
        Self {
            score: result.score,
            status: result.status.to_string(),
            details: result.details.clone(),
        }
    }
}

impl MatchReport {
    /// `MatchScore` から表示/連携用レポートを構築する
    pub fn from_match_score(
        candidate: &CandidateProfile,
        job: &JobRequirement,
        score: &MatchScore,
    ) -> Self {
        Self {
            job_title: job.title.clone(),
            candidate_name: candidate.name.clone(),
            overall: score.overall,
            breakdown: ScoreBreakdown {
                skills: DimensionScore::from(&score.skills),
                experience: DimensionScore::from(&score.experience),
                qualification: DimensionScore::from(&score.qualification),
            },
            matched_skills: score.matched_skills.clone(),
            missing_skills: score.missing_skills.clone(),
            detected_skills: None,
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            scored_at: Utc::now(),
        }
    }

    pub fn with_detected_skills(mut self, mut detected: Vec<String>) -> Self {
        detected.sort();
        self.detected_skills = Some(detected);
        self
    }
}
