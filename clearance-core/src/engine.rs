//! Analysis orchestration.

use crate::aggregate::{derive_issues, overall_risk};
use crate::analyzer::analyze_dimensions;
use crate::domain::{AnalysisReport, Submission};
use crate::recommend::generate_recommendations;

/// Analyze one submission snapshot into a complete report.
///
/// Pure and deterministic: the same snapshot always yields an identical
/// report, and no invocation shares state with any other. The function is
/// total; there is no input, including an empty submission, for which it
/// fails.
pub fn analyze(submission: &Submission) -> AnalysisReport {
    let dimensions = analyze_dimensions(submission);
    let overall = overall_risk(submission);
    let issues = derive_issues(&dimensions);
    let recommendations = generate_recommendations(overall, submission, &dimensions);

    AnalysisReport {
        overall_risk: overall,
        issues,
        recommendations,
        dimensions,
    }
}
