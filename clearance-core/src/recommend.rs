//! Recommendation generation.

use crate::domain::{DimensionAnalysis, Recommendation, RiskLevel, Submission};

/// Generate prioritized recommendations in fixed rule order.
///
/// The list is append-only and never sorted or deduplicated; callers rely on
/// insertion order. The final two entries are unconditional, so the list is
/// never empty.
pub fn generate_recommendations(
    overall: RiskLevel,
    submission: &Submission,
    dimensions: &DimensionAnalysis,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if overall == RiskLevel::High {
        recommendations.push(Recommendation::new(
            RiskLevel::High,
            "Consider Alternative Content",
            "Your video has high copyright risk. Consider using royalty-free alternatives.",
        ));
    }

    if submission.uses_music && submission.music_source.contains("commercial") {
        recommendations.push(Recommendation::new(
            RiskLevel::High,
            "Replace Commercial Music",
            "Use YouTube Audio Library, Creative Commons, or original music instead.",
        ));
    }

    if dimensions.title.risk == RiskLevel::Medium {
        recommendations.push(Recommendation::new(
            RiskLevel::Medium,
            "Modify Title",
            "Remove trademarked terms and use more descriptive, original language.",
        ));
    }

    recommendations.push(Recommendation::new(
        RiskLevel::Low,
        "Add Proper Attribution",
        "Include credits and sources in your description for any third-party content.",
    ));

    recommendations.push(Recommendation::new(
        RiskLevel::Low,
        "Monitor Content ID",
        "Check for Content ID claims after upload and be prepared to dispute false positives.",
    ));

    recommendations
}
