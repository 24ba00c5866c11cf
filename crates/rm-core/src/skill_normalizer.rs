use std::collections::HashSet;

/// スキル集合の正規化（trim + 小文字化、重複は collapse）
///
/// 空白のみの要素は空文字としてそのまま集合に残す契約。入力リストの
/// フィルタリングは行わない（カンマ区切り入力の strip は CLI 境界の責務）。
pub fn normalize_skill_set(skills: &[String]) -> HashSet<String> {
    skills
        .iter()
        .map(|skill| skill.trim().to_lowercase())
        .collect()
}
