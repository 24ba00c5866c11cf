use std::fmt::Write as _;

use rm_core::report::MatchReport;

/// スコアレポートのテキスト整形
pub fn render_report(report: &MatchReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Job:       {}", report.job_title);
    let _ = writeln!(out, "Candidate: {}", report.candidate_name);
    let _ = writeln!(out);

    for (label, dimension) in [
        ("Skills", &report.breakdown.skills),
        ("Experience", &report.breakdown.experience),
        ("Qualification", &report.breakdown.qualification),
    ] {
        let _ = writeln!(
            out,
            "{label:<14} {:>5.2}  {:<13} {}",
            dimension.score, dimension.status, dimension.details
        );
    }
    let _ = writeln!(
        out,
        "{:<14} {:>5.2}  ({:.0}%)",
        "Overall",
        report.overall,
        report.overall * 100.0
    );

    if !report.matched_skills.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Matched skills: {}", report.matched_skills.join(", "));
    }
    if !report.missing_skills.is_empty() {
        let _ = writeln!(out, "Missing skills: {}", report.missing_skills.join(", "));
    }
    if let Some(detected) = &report.detected_skills {
        let _ = writeln!(out, "Detected skills: {}", detected.join(", "));
    }

    out
}

/// カテゴリ別抽出結果のテキスト整形
pub fn render_extraction(grouped: &[(&'static str, Vec<String>)]) -> String {
    if grouped.is_empty() {
        return "no skills detected\n".to_string();
    }

    let mut out = String::new();
    for (category, skills) in grouped {
        let _ = writeln!(out, "{category}: {}", skills.join(", "));
    }
    out
}
