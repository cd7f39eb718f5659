//! Dimension analyzers: six pure verdicts, one per submission facet.
//!
//! Every analyzer is total. Each returns exactly one risk level and a
//! non-empty details string for any input, including empty strings and
//! unrecognized provenance values.

use crate::domain::{DimensionAnalysis, DimensionVerdict, RiskLevel, Submission};
use crate::rules;

/// Analyze the title for potentially trademarked terms.
pub fn analyze_title(submission: &Submission) -> DimensionVerdict {
    let (risk, details) = rules::TITLE.classify(&submission.title);
    DimensionVerdict::new(risk, details)
}

/// Analyze the description. Informational only: the risk is always low,
/// copyright-related terms merely change the wording.
pub fn analyze_description(submission: &Submission) -> DimensionVerdict {
    let (risk, details) = rules::DESCRIPTION.classify(&submission.description);
    DimensionVerdict::new(risk, details)
}

/// Analyze music provenance.
pub fn analyze_music(submission: &Submission) -> DimensionVerdict {
    if !submission.uses_music {
        return DimensionVerdict::new(RiskLevel::Low, "No music detected");
    }
    let (risk, details) = rules::MUSIC_SOURCE.classify(&submission.music_source);
    DimensionVerdict::new(risk, details)
}

/// Analyze footage provenance.
pub fn analyze_footage(submission: &Submission) -> DimensionVerdict {
    if !submission.uses_footage {
        return DimensionVerdict::new(RiskLevel::Low, "Original footage only");
    }
    let (risk, details) = rules::FOOTAGE_SOURCE.classify(&submission.footage_source);
    DimensionVerdict::new(risk, details)
}

/// Analyze thumbnail presence. Informational only: the artifact's bytes are
/// never inspected and the risk is always low.
pub fn analyze_thumbnail(submission: &Submission) -> DimensionVerdict {
    let details = if submission.has_thumbnail() {
        "Custom thumbnail uploaded"
    } else {
        "No custom thumbnail"
    };
    DimensionVerdict::new(RiskLevel::Low, details)
}

/// Analyze external text provenance.
pub fn analyze_text(submission: &Submission) -> DimensionVerdict {
    if !submission.has_text {
        return DimensionVerdict::new(RiskLevel::Low, "No external text content");
    }
    let (risk, details) = rules::TEXT_SOURCE.classify(&submission.text_source);
    DimensionVerdict::new(risk, details)
}

/// Run all six analyzers over one submission snapshot.
pub fn analyze_dimensions(submission: &Submission) -> DimensionAnalysis {
    DimensionAnalysis {
        title: analyze_title(submission),
        description: analyze_description(submission),
        music: analyze_music(submission),
        footage: analyze_footage(submission),
        thumbnail: analyze_thumbnail(submission),
        text: analyze_text(submission),
    }
}
