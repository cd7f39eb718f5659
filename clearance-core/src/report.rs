//! Report rendering for Clearance outputs.

use std::fmt::Write;

use serde::Serialize;

use crate::domain::{AnalysisReport, Issue, Recommendation};

/// Render a report as Markdown.
pub fn render_markdown(report: &AnalysisReport) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "# Clearance Report\n");
    let _ = writeln!(output, "## Overall Risk: {}\n", report.overall_risk.label());
    let _ = writeln!(output, "{}\n", report.overall_risk.summary());

    let _ = writeln!(output, "### Content Analysis");
    for (dimension, verdict) in report.dimensions.iter() {
        let _ = writeln!(
            output,
            "- **{}** ({}): {}",
            dimension.as_str(),
            verdict.risk.label(),
            verdict.details
        );
    }
    let _ = writeln!(output);

    append_issues_markdown(&mut output, &report.issues);
    append_recommendations_markdown(&mut output, &report.recommendations);
    output
}

/// Render a report as plain text.
pub fn render_text(report: &AnalysisReport) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "Overall risk: {}", report.overall_risk.label());
    let _ = writeln!(output, "{}\n", report.overall_risk.summary());

    let _ = writeln!(output, "Content analysis:");
    for (dimension, verdict) in report.dimensions.iter() {
        let _ = writeln!(
            output,
            "  {:<11} [{}] {}",
            dimension.as_str(),
            verdict.risk.label(),
            verdict.details
        );
    }

    if report.issues.is_empty() {
        let _ = writeln!(output, "\nNo issues found.");
    } else {
        let _ = writeln!(output, "\nIssues found:");
        for issue in &report.issues {
            let _ = writeln!(
                output,
                "  [{}/{}] {}: {}",
                issue.kind.as_str(),
                issue.severity.label(),
                issue.message,
                issue.details
            );
        }
    }

    let _ = writeln!(output, "\nRecommendations:");
    for recommendation in &report.recommendations {
        let _ = writeln!(
            output,
            "  [{}] {}: {}",
            recommendation.priority.label(),
            recommendation.title,
            recommendation.description
        );
    }
    output
}

/// Render any serializable report payload as JSON.
pub fn render_json<T: Serialize + ?Sized>(payload: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(payload)
}

fn append_issues_markdown(output: &mut String, issues: &[Issue]) {
    if issues.is_empty() {
        let _ = writeln!(output, "### Issues\nNo issues found.\n");
        return;
    }
    let _ = writeln!(output, "### Issues");
    for issue in issues {
        let _ = writeln!(
            output,
            "- [{}] **{}**: {}",
            issue.kind.as_str(),
            issue.message,
            issue.details
        );
    }
    let _ = writeln!(output);
}

fn append_recommendations_markdown(output: &mut String, recommendations: &[Recommendation]) {
    let _ = writeln!(output, "### Recommendations");
    for recommendation in recommendations {
        let _ = writeln!(
            output,
            "- **{}** ({} priority): {}",
            recommendation.title,
            recommendation.priority.label(),
            recommendation.description
        );
    }
    let _ = writeln!(output);
}

#[cfg(test)]
mod tests {
    use super::{render_json, render_markdown, render_text};
    use crate::domain::Submission;
    use crate::engine::analyze;

    fn risky_report() -> crate::domain::AnalysisReport {
        analyze(&Submission {
            title: "Official Trailer Reaction".to_string(),
            uses_music: true,
            music_source: "commercial".to_string(),
            uses_footage: true,
            footage_source: "stock-footage".to_string(),
            ..Submission::default()
        })
    }

    #[test]
    fn renders_markdown_sections() {
        let output = render_markdown(&risky_report());
        assert!(output.contains("# Clearance Report"));
        assert!(output.contains("## Overall Risk: High"));
        assert!(output.contains("[music] **Potential copyrighted music detected**"));
        assert!(output.contains("**Consider Alternative Content** (High priority)"));
    }

    #[test]
    fn renders_text_sections() {
        let output = render_text(&risky_report());
        assert!(output.contains("Overall risk: High"));
        assert!(output.contains("Stock footage may require licensing"));
        assert!(output.contains("[Low] Monitor Content ID"));
    }

    #[test]
    fn text_report_for_safe_submission_has_no_issue_lines() {
        let report = analyze(&Submission {
            title: "My Vacation".to_string(),
            ..Submission::default()
        });
        let output = render_text(&report);
        assert!(output.contains("No issues found."));
    }

    #[test]
    fn renders_json_payload() {
        let json = render_json(&risky_report()).expect("json");
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(parsed["overallRisk"], "high");
        assert_eq!(parsed["issues"][0]["type"], "music");
        assert_eq!(parsed["dimensions"]["footage"]["risk"], "medium");
    }
}
