use crate::{CandidateProfile, JobRequirement};

/// 経験年数マッチ率（必要年数ゼロなら 1.0、超過分の加点なし）
///
/// 負値の検証はここでは行わない。呼び出し側が 0 以上に clamp してから
/// 渡す契約（CLI 境界で実施）。
pub fn match_experience(candidate: &CandidateProfile, job: &JobRequirement) -> f64 {
    let required = job.required_experience_years;
    if required == 0.0 {
        return 1.0;
    }
    if candidate.experience_years >= required {
        return 1.0;
    }
    candidate.experience_years / required
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(candidate_years: f64, required_years: f64) -> (CandidateProfile, JobRequirement) {
        (
            CandidateProfile {
                experience_years: candidate_years,
                ..CandidateProfile::default()
            },
            JobRequirement {
                required_experience_years: required_years,
                ..JobRequirement::default()
            },
        )
    }

    #[test]
    fn zero_requirement_is_always_satisfied() {
        let (candidate, job) = pair(0.0, 0.0);
        assert_eq!(match_experience(&candidate, &job), 1.0);
    }

    #[test]
    fn saturates_at_required_years() {
        let (candidate, job) = pair(4.0, 3.0);
        assert_eq!(match_experience(&candidate, &job), 1.0);

        let (exact, job) = pair(3.0, 3.0);
        assert_eq!(match_experience(&exact, &job), 1.0);
    }

    #[test]
    fn linear_partial_credit_below_requirement() {
        let (candidate, job) = pair(1.0, 4.0);
        assert!((match_experience(&candidate, &job) - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn monotone_in_candidate_years() {
        let job = JobRequirement {
            required_experience_years: 5.0,
            ..JobRequirement::default()
        };

        let mut last = -1.0;
        for years in [0.0, 1.0, 2.5, 4.0, 5.0, 8.0] {
            let candidate = CandidateProfile {
                experience_years: years,
                ..CandidateProfile::default()
            };
            let score = match_experience(&candidate, &job);
            assert!(score >= last);
            last = score;
        }
        assert_eq!(last, 1.0);
    }
}
