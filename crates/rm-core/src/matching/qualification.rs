use crate::{CandidateProfile, JobRequirement};

/// 学歴序列（低→高）。未知のラベルは "none"(0) 扱い
pub const QUALIFICATION_LEVELS: &[(&str, u32)] = &[
    ("none", 0),
    ("high school", 1),
    ("associate's degree", 2),
    ("bachelor's degree", 3),
    ("master's degree", 4),
    ("phd", 5),
];

/// 学歴ラベル → 序列レベル
///
/// 小文字化して照合する。未知・空・未指定はすべてレベル 0。
pub fn qualification_level(qualification: Option<&str>) -> u32 {
    let Some(raw) = qualification else { return 0 };
    let label = raw.to_lowercase();
    QUALIFICATION_LEVELS
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, level)| *level)
        .unwrap_or(0)
}

fn effective_label(qualification: Option<&str>) -> String {
    match qualification {
        Some(raw) if !raw.is_empty() => raw.to_lowercase(),
        _ => "none".to_string(),
    }
}

/// 学歴要件マッチ判定
///
/// 分岐の評価順序は既存挙動と互換であること。branch 1 は「要件が
/// なし/高卒」の場合に何らかの学歴（レベル > 0）で満額とする特例。
// TODO: confirm with product whether a "high school" bar should require
// level >= 1 instead; today any level > 0 clears it via branch 1.
pub fn match_qualification(candidate: &CandidateProfile, job: &JobRequirement) -> f64 {
    let candidate_level = qualification_level(candidate.qualification.as_deref());
    let required_level = qualification_level(job.required_qualification.as_deref());
    let required_label = effective_label(job.required_qualification.as_deref());

    // 1. 低い要件（なし/高卒）は何らかの学歴があれば満額
    if (required_level == 0 || required_label == "none" || required_label == "high school")
        && candidate_level > 0
    {
        return 1.0;
    }
    // 2. 双方「なし」も充足扱い
    if required_level == 0 && candidate_level == 0 {
        return 1.0;
    }
    // 3. 要件レベル以上
    if candidate_level >= required_level {
        return 1.0;
    }
    // 4. 線形の部分点
    if required_level > 0 {
        return candidate_level as f64 / required_level as f64;
    }
    // 5. 上の分岐で尽きるが、契約として 0.0 を定義
    0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(candidate: Option<&str>, required: Option<&str>) -> (CandidateProfile, JobRequirement) {
        (
            CandidateProfile {
                qualification: candidate.map(str::to_string),
                ..CandidateProfile::default()
            },
            JobRequirement {
                required_qualification: required.map(str::to_string),
                ..JobRequirement::default()
            },
        )
    }

    #[test]
    fn level_lookup_is_case_insensitive_and_total() {
        assert_eq!(qualification_level(Some("PhD")), 5);
        assert_eq!(qualification_level(Some("Bachelor's Degree")), 3);
        assert_eq!(qualification_level(Some("bootcamp certificate")), 0);
        assert_eq!(qualification_level(Some("")), 0);
        assert_eq!(qualification_level(None), 0);
    }

    #[test]
    fn equal_levels_match_fully() {
        let (candidate, job) = pair(Some("bachelor's degree"), Some("bachelor's degree"));
        assert_eq!(match_qualification(&candidate, &job), 1.0);
    }

    #[test]
    fn partial_credit_below_required_level() {
        let (candidate, job) = pair(Some("high school"), Some("master's degree"));
        assert!((match_qualification(&candidate, &job) - 0.25).abs() < f64::EPSILON);

        let (candidate, job) = pair(Some("high school"), Some("phd"));
        assert!((match_qualification(&candidate, &job) - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn low_bar_cleared_by_any_qualification() {
        let (candidate, job) = pair(Some("phd"), Some("none"));
        assert_eq!(match_qualification(&candidate, &job), 1.0);

        let (candidate, job) = pair(Some("associate's degree"), Some("high school"));
        assert_eq!(match_qualification(&candidate, &job), 1.0);
    }

    #[test]
    fn both_absent_is_satisfied() {
        let (candidate, job) = pair(None, None);
        assert_eq!(match_qualification(&candidate, &job), 1.0);

        let (candidate, job) = pair(Some(""), Some(""));
        assert_eq!(match_qualification(&candidate, &job), 1.0);
    }

    #[test]
    fn unqualified_candidate_against_real_bar_scores_zero() {
        let (candidate, job) = pair(None, Some("high school"));
        assert_eq!(match_qualification(&candidate, &job), 0.0);

        let (candidate, job) = pair(Some("self-taught"), Some("bachelor's degree"));
        assert_eq!(match_qualification(&candidate, &job), 0.0);
    }

    #[test]
    fn unrecognized_requirement_acts_as_no_bar() {
        // 未知ラベルはレベル0なので branch 1/2 で処理される
        let (candidate, job) = pair(Some("phd"), Some("certified wizard"));
        assert_eq!(match_qualification(&candidate, &job), 1.0);

        let (candidate, job) = pair(None, Some("certified wizard"));
        assert_eq!(match_qualification(&candidate, &job), 1.0);
    }
}
