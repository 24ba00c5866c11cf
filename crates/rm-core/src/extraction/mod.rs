use std::collections::HashSet;

use tracing::debug;

/// スキルキーワード辞書（カテゴリ → キーワード列）
///
/// 検出は小文字化した本文への部分一致で行う。語境界チェックはしない
/// ため、短いキーワード（"r", "go", "c#" など）は過検出し得る。既知の
/// 挙動であり互換性のため維持する。
pub const SKILL_TAXONOMY: &[(&str, &[&str])] = &[
    (
        "Programming",
        &[
            "python",
            "java",
            "javascript",
            "c++",
            "c#",
            "ruby",
            "php",
            "swift",
            "kotlin",
            "go",
            "rust",
        ],
    ),
    (
        "Web Dev",
        &[
            "html", "css", "react", "angular", "vue", "node.js", "django", "flask", "spring",
            "express",
        ],
    ),
    (
        "Databases",
        &["sql", "mysql", "postgresql", "mongodb", "redis", "oracle", "sqlite"],
    ),
    (
        "Cloud/DevOps",
        &[
            "aws",
            "azure",
            "google cloud",
            "docker",
            "kubernetes",
            "jenkins",
            "terraform",
            "ansible",
        ],
    ),
    (
        "Data Science",
        &[
            "pandas",
            "numpy",
            "tensorflow",
            "pytorch",
            "scikit-learn",
            "r",
            "tableau",
            "power bi",
        ],
    ),
    (
        "Tools",
        &[
            "git",
            "github",
            "gitlab",
            "jira",
            "confluence",
            "slack",
            "trello",
            "figma",
            "photoshop",
        ],
    ),
];

/// 本文からスキルキーワードを抽出する（重複排除済み・順序なし）
///
/// 空文字・不一致は空集合。例外は投げない全域関数。
pub fn extract_skills(text: &str) -> HashSet<String> {
    let text_lower = text.to_lowercase();
    let mut detected = HashSet::new();

    for (_, keywords) in SKILL_TAXONOMY {
        for keyword in keywords.iter() {
            if text_lower.contains(keyword) {
                detected.insert((*keyword).to_string());
            }
        }
    }

    debug!(count = detected.len(), "skills detected in text");
    detected
}

/// カテゴリ別の抽出結果（表示用）
///
/// 検出規則は `extract_skills` と同一。カテゴリは辞書定義順のまま、
/// ヒットのないカテゴリは省く。
pub fn extract_skills_by_category(text: &str) -> Vec<(&'static str, Vec<String>)> {
    let text_lower = text.to_lowercase();

    SKILL_TAXONOMY
        .iter()
        .filter_map(|(category, keywords)| {
            let hits: Vec<String> = keywords
                .iter()
                .filter(|keyword| text_lower.contains(*keyword))
                .map(|keyword| (*keyword).to_string())
                .collect();
            if hits.is_empty() {
                None
            } else {
                Some((*category, hits))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_skills_from_plain_text() {
        let detected =
            extract_skills("I have 5 years of Python and Django experience with AWS and Docker");

        for expected in ["python", "django", "aws", "docker"] {
            assert!(detected.contains(expected), "missing {expected}");
        }
    }

    #[test]
    fn substring_matching_has_known_false_positives() {
        // "experience" は "r" を、"django" は "go" を含む
        let detected = extract_skills("experience with django");

        assert!(detected.contains("r"));
        assert!(detected.contains("go"));
        assert!(detected.contains("django"));
    }

    #[test]
    fn detection_is_case_insensitive() {
        let detected = extract_skills("KUBERNETES and PostgreSQL, Scikit-Learn");

        assert!(detected.contains("kubernetes"));
        assert!(detected.contains("postgresql"));
        assert!(detected.contains("scikit-learn"));
        // "postgresql" は "sql" も部分一致で拾う
        assert!(detected.contains("sql"));
    }

    #[test]
    fn duplicates_collapse_to_one_entry() {
        let detected = extract_skills("rust rust rust");
        assert_eq!(
            detected.iter().filter(|s| s.as_str() == "rust").count(),
            1
        );
    }

    #[test]
    fn empty_text_yields_empty_set() {
        assert!(extract_skills("").is_empty());
        // "r" や "go" の部分一致すら起きない入力
        assert!(extract_skills("12345 !?").is_empty());
    }

    #[test]
    fn extraction_is_idempotent() {
        let text = "Java, Spring, MySQL, Jenkins and Terraform on Azure";
        assert_eq!(extract_skills(text), extract_skills(text));
    }

    #[test]
    fn grouped_view_matches_flat_set() {
        let text = "React front end, Django back end, Docker deploys, Git flow";
        let grouped = extract_skills_by_category(text);
        let flat = extract_skills(text);

        let union: HashSet<String> = grouped
            .iter()
            .flat_map(|(_, skills)| skills.iter().cloned())
            .collect();
        assert_eq!(union, flat);

        let categories: Vec<&str> = grouped.iter().map(|(category, _)| *category).collect();
        let mut expected_order = categories.clone();
        expected_order.sort_by_key(|category| {
            SKILL_TAXONOMY
                .iter()
                .position(|(name, _)| name == category)
                .unwrap()
        });
        assert_eq!(categories, expected_order);
    }

    #[test]
    fn symbol_keywords_are_detected() {
        let detected = extract_skills("C++ and C# development, node.js services");

        assert!(detected.contains("c++"));
        assert!(detected.contains("c#"));
        assert!(detected.contains("node.js"));
    }
}
