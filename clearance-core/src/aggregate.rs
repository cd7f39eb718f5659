//! Overall risk scoring and issue derivation.
//!
//! These are two independent computations. The overall risk is a weighted
//! score over the submission's raw fields; the issues list re-inspects the
//! dimension verdicts against fixed triggers. They intentionally disagree in
//! places: footage classified high and music classified medium never raise
//! an issue, and only the score reflects them.

use crate::domain::{Dimension, DimensionAnalysis, Issue, RiskLevel, Submission};
use crate::rules::contains_any;

/// Score contribution for commercial music.
pub const COMMERCIAL_MUSIC_WEIGHT: u32 = 30;
/// Score contribution for stock footage.
pub const STOCK_FOOTAGE_WEIGHT: u32 = 20;
/// Score contribution for an official/trailer title.
pub const RISKY_TITLE_WEIGHT: u32 = 25;
/// Score contribution for text from published works.
pub const PUBLISHED_TEXT_WEIGHT: u32 = 15;
/// Scores at or above this are high risk.
pub const HIGH_RISK_THRESHOLD: u32 = 50;
/// Scores at or above this (but below the high threshold) are medium risk.
pub const MEDIUM_RISK_THRESHOLD: u32 = 25;

/// Weighted risk score over the submission's raw fields.
pub fn risk_score(submission: &Submission) -> u32 {
    let mut score = 0;
    if submission.uses_music && submission.music_source.contains("commercial") {
        score += COMMERCIAL_MUSIC_WEIGHT;
    }
    if submission.uses_footage && submission.footage_source.contains("stock") {
        score += STOCK_FOOTAGE_WEIGHT;
    }
    if contains_any(&submission.title.to_lowercase(), &["official", "trailer"]) {
        score += RISKY_TITLE_WEIGHT;
    }
    if submission.has_text && contains_any(&submission.text_source, &["book", "article"]) {
        score += PUBLISHED_TEXT_WEIGHT;
    }
    score
}

/// Classify the weighted score into an overall risk level.
pub fn overall_risk(submission: &Submission) -> RiskLevel {
    let score = risk_score(submission);
    if score >= HIGH_RISK_THRESHOLD {
        RiskLevel::High
    } else if score >= MEDIUM_RISK_THRESHOLD {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Derive the issues list from dimension verdicts, in fixed trigger order:
/// music high, footage medium, title medium. No other verdict raises one.
pub fn derive_issues(dimensions: &DimensionAnalysis) -> Vec<Issue> {
    let mut issues = Vec::new();

    if dimensions.music.risk == RiskLevel::High {
        issues.push(Issue {
            kind: Dimension::Music,
            severity: RiskLevel::High,
            message: "Potential copyrighted music detected".to_string(),
            details: "Commercial music tracks are often subject to copyright claims".to_string(),
        });
    }

    if dimensions.footage.risk == RiskLevel::Medium {
        issues.push(Issue {
            kind: Dimension::Footage,
            severity: RiskLevel::Medium,
            message: "Stock footage may require licensing".to_string(),
            details: "Verify that your footage is royalty-free or properly licensed".to_string(),
        });
    }

    if dimensions.title.risk == RiskLevel::Medium {
        issues.push(Issue {
            kind: Dimension::Title,
            severity: RiskLevel::Medium,
            message: "Title may contain trademarked terms".to_string(),
            details: "Consider using more generic terms to avoid potential issues".to_string(),
        });
    }

    issues
}
