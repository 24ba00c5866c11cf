use crate::skill_normalizer::normalize_skill_set;
use crate::{CandidateProfile, JobRequirement};

/// スキルマッチング結果（表示用の一致/不足内訳付き）
#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatchResult {
    pub score: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub reason: String,
}

/// 必須スキル一致率の算出
///
/// 必須スキル集合が空なら 1.0（要件なし＝充足）。それ以外は
/// |candidate ∩ required| / |required|。要件外の余剰スキルは加点しない。
pub fn match_skills(candidate: &CandidateProfile, job: &JobRequirement) -> f64 {
    evaluate_skills(candidate, job).score
}

/// スキルマッチングの詳細評価（スコア + 一致/不足リスト）
///
/// 一致/不足は小文字化済み・ソート済みで返す。比較規則は
/// `match_skills` と同一。
pub fn evaluate_skills(candidate: &CandidateProfile, job: &JobRequirement) -> SkillMatchResult {
    let required = normalize_skill_set(&job.required_skills);

    // 必須スキル要件がなければ合格
    if required.is_empty() {
        return SkillMatchResult {
            score: 1.0,
            matched: vec![],
            missing: vec![],
            reason: "no required skills".to_string(),
        };
    }

    let possessed = normalize_skill_set(&candidate.skills);

    let mut matched: Vec<String> = required.intersection(&possessed).cloned().collect();
    matched.sort();
    let mut missing: Vec<String> = required.difference(&possessed).cloned().collect();
    missing.sort();

    let score = matched.len() as f64 / required.len() as f64;

    SkillMatchResult {
        score,
        reason: format!(
            "matched {} of {} required skills ({:.0}%)",
            matched.len(),
            required.len(),
            score * 100.0
        ),
        matched,
        missing,
    }
}
