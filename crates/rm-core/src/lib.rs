pub mod extraction;
pub mod logging;
pub mod matching;
pub mod report;
pub mod skill_normalizer;

use serde::{Deserialize, Serialize};

// Commonly used data models for matching functions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct JobRequirement {
    /// 表示用タイトル。スコアリングには使わない
    pub title: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub required_experience_years: f64,
    /// 学歴要件。空/未指定は「なし」扱い
    #[serde(default)]
    pub required_qualification: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CandidateProfile {
    /// 表示用氏名。スコアリングには使わない
    pub name: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience_years: f64,
    #[serde(default)]
    pub qualification: Option<String>,
}
