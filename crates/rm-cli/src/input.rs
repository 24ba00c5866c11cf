use std::fs;
use std::path::Path;

use rm_core::extraction::extract_skills;
use rm_core::{CandidateProfile, JobRequirement};

use crate::error::CliError;
use crate::pdf;

/// PDF入力時の上書き項目（年数・学歴はPDFから拾えないため）
#[derive(Debug, Clone, Default)]
pub struct CandidateOverrides {
    pub name: Option<String>,
    pub skills: Option<Vec<String>>,
    pub experience_years: Option<f64>,
    pub qualification: Option<String>,
}

/// カンマ区切りスキル入力の分割。各要素は strip のみで、空要素も保持する
pub fn parse_skill_list(input: &str) -> Vec<String> {
    input.split(',').map(|s| s.trim().to_string()).collect()
}

fn trim_entries(entries: Vec<String>) -> Vec<String> {
    entries
        .into_iter()
        .map(|entry| entry.trim().to_string())
        .collect()
}

/// 入力境界の整形: スキルの strip、経験年数の 0 以上への clamp
pub fn sanitize_job(mut job: JobRequirement) -> JobRequirement {
    job.required_skills = trim_entries(job.required_skills);
    job.required_experience_years = job.required_experience_years.max(0.0);
    job.required_qualification = job
        .required_qualification
        .map(|q| q.trim().to_string());
    job
}

pub fn sanitize_candidate(mut candidate: CandidateProfile) -> CandidateProfile {
    candidate.skills = trim_entries(candidate.skills);
    candidate.experience_years = candidate.experience_years.max(0.0);
    candidate.qualification = candidate.qualification.map(|q| q.trim().to_string());
    candidate
}

pub fn load_job(path: &Path) -> Result<JobRequirement, CliError> {
    let raw = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let job: JobRequirement = serde_json::from_str(&raw).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(sanitize_job(job))
}

pub fn load_candidate(path: &Path) -> Result<CandidateProfile, CliError> {
    let raw = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let candidate: CandidateProfile =
        serde_json::from_str(&raw).map_err(|source| CliError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(sanitize_candidate(candidate))
}

/// 抽出テキストの先頭行（空行スキップ、50文字まで）を氏名の既定値とする
fn candidate_name_from_text(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(|line| line.chars().take(50).collect())
}

/// PDF から候補者プロフィールを組み立てる
///
/// テキスト抽出に失敗してもエラーにせず、スキル未検出のプロフィールを
/// 返す。戻り値の第二要素は自動検出スキル（ソート済み、表示用）。
pub fn candidate_from_pdf(
    path: &Path,
    overrides: &CandidateOverrides,
) -> (CandidateProfile, Vec<String>) {
    let text = pdf::extract_text(path);

    let mut detected: Vec<String> = extract_skills(&text).into_iter().collect();
    detected.sort();

    let name = overrides
        .name
        .clone()
        .or_else(|| candidate_name_from_text(&text))
        .unwrap_or_else(|| "Candidate from PDF".to_string());

    // --skills 指定があれば自動検出より優先する（検出結果は表示用に残す）
    let skills = overrides.skills.clone().unwrap_or_else(|| detected.clone());

    let candidate = sanitize_candidate(CandidateProfile {
        name,
        skills,
        experience_years: overrides.experience_years.unwrap_or(0.0),
        qualification: overrides.qualification.clone(),
    });

    (candidate, detected)
}
