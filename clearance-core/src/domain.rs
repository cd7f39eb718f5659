//! Domain entities for Clearance.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Copyright exposure classification, ordered from safest to riskiest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Minimal copyright exposure.
    Low,
    /// Some potential copyright exposure.
    Medium,
    /// Significant copyright exposure.
    High,
}

impl RiskLevel {
    /// Capitalized display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// One-sentence summary for an overall verdict at this level.
    pub fn summary(&self) -> &'static str {
        match self {
            Self::High => {
                "Your content has significant copyright risks. \
                 Review the recommendations below before uploading."
            }
            Self::Medium => {
                "Your content has some potential copyright issues. \
                 Consider the recommendations to reduce risk."
            }
            Self::Low => {
                "Your content appears to have minimal copyright risks. \
                 Review recommendations for best practices."
            }
        }
    }
}

/// One independently analyzed facet of a submission.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// The video title.
    Title,
    /// The video description.
    Description,
    /// Music usage and provenance.
    Music,
    /// Third-party footage usage and provenance.
    Footage,
    /// Custom thumbnail presence.
    Thumbnail,
    /// External text content usage and provenance.
    Text,
}

impl Dimension {
    /// Lowercase name used in rendered output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Music => "music",
            Self::Footage => "footage",
            Self::Thumbnail => "thumbnail",
            Self::Text => "text",
        }
    }
}

/// A creator-supplied description of a video, snapshotted before analysis.
///
/// Provenance fields (`music_source` and friends) are free-form strings; the
/// engine only recognizes fixed substrings and falls through to a default
/// classification for anything else, including the empty string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Submission {
    /// Video title. The presentation layer requires this to be non-empty
    /// before invoking analysis; the engine tolerates an empty title.
    pub title: String,
    /// Video description.
    pub description: String,
    /// Comma-separated free-text tags. Reserved: no rule reads this yet.
    pub tags: String,
    /// Whether the video contains music.
    pub uses_music: bool,
    /// Where the music came from.
    pub music_source: String,
    /// Whether the video contains third-party footage.
    pub uses_footage: bool,
    /// Where the footage came from.
    pub footage_source: String,
    /// Whether the video contains text from external sources.
    pub has_text: bool,
    /// Where the text came from.
    pub text_source: String,
    /// Opaque handle to the video file. Never read; reserved for
    /// content-based analysis.
    #[schema(value_type = Option<String>)]
    pub video_file: Option<PathBuf>,
    /// Opaque handle to the audio file. Never read; reserved for
    /// content-based analysis.
    #[schema(value_type = Option<String>)]
    pub audio_file: Option<PathBuf>,
    /// Opaque handle to a custom thumbnail. Only presence matters.
    #[schema(value_type = Option<String>)]
    pub thumbnail_file: Option<PathBuf>,
}

impl Submission {
    /// Whether a custom thumbnail artifact was supplied.
    pub fn has_thumbnail(&self) -> bool {
        self.thumbnail_file.is_some()
    }
}

/// A dimension's classification result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DimensionVerdict {
    /// Risk attributed to this dimension.
    pub risk: RiskLevel,
    /// User-facing explanation of which branch fired.
    pub details: String,
}

impl DimensionVerdict {
    /// Build a verdict.
    pub fn new(risk: RiskLevel, details: impl Into<String>) -> Self {
        Self {
            risk,
            details: details.into(),
        }
    }
}

/// Per-dimension verdicts for one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DimensionAnalysis {
    /// Title verdict.
    pub title: DimensionVerdict,
    /// Description verdict. Informational only; never raises an issue.
    pub description: DimensionVerdict,
    /// Music verdict.
    pub music: DimensionVerdict,
    /// Footage verdict.
    pub footage: DimensionVerdict,
    /// Thumbnail verdict. Informational only; never raises an issue.
    pub thumbnail: DimensionVerdict,
    /// Text verdict.
    pub text: DimensionVerdict,
}

impl DimensionAnalysis {
    /// Iterate verdicts in presentation order.
    pub fn iter(&self) -> [(Dimension, &DimensionVerdict); 6] {
        [
            (Dimension::Title, &self.title),
            (Dimension::Description, &self.description),
            (Dimension::Music, &self.music),
            (Dimension::Footage, &self.footage),
            (Dimension::Thumbnail, &self.thumbnail),
            (Dimension::Text, &self.text),
        ]
    }
}

/// A flagged problem derived from a dimension verdict crossing a trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Issue {
    /// Dimension the issue originates from.
    #[serde(rename = "type")]
    pub kind: Dimension,
    /// Severity of the issue.
    pub severity: RiskLevel,
    /// Short user-facing message.
    pub message: String,
    /// Longer user-facing explanation.
    pub details: String,
}

/// A prioritized actionable suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recommendation {
    /// Priority of the suggestion.
    pub priority: RiskLevel,
    /// Short title.
    pub title: String,
    /// Longer description of the suggested action.
    pub description: String,
}

impl Recommendation {
    /// Build a recommendation.
    pub fn new(
        priority: RiskLevel,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            priority,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Complete result of one analysis run. Immutable once produced; a new
/// analysis replaces the old report entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Aggregate score-derived classification.
    pub overall_risk: RiskLevel,
    /// Flagged problems, in trigger-evaluation order.
    pub issues: Vec<Issue>,
    /// Suggestions, in generation-rule order (not sorted by priority).
    pub recommendations: Vec<Recommendation>,
    /// Per-dimension verdicts.
    pub dimensions: DimensionAnalysis,
}

#[cfg(test)]
mod tests {
    use super::{Dimension, RiskLevel, Submission};
    use std::path::PathBuf;

    #[test]
    fn risk_levels_are_totally_ordered() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
    }

    #[test]
    fn risk_level_serializes_lowercase() {
        let json = serde_json::to_string(&RiskLevel::Medium).expect("serialize");
        assert_eq!(json, "\"medium\"");
    }

    #[test]
    fn submission_defaults_are_safe() {
        let submission = Submission::default();
        assert!(submission.title.is_empty());
        assert!(!submission.uses_music);
        assert!(!submission.has_thumbnail());
    }

    #[test]
    fn submission_round_trips_camel_case() {
        let json = r#"{"title":"My Vacation","usesMusic":true,"musicSource":"commercial"}"#;
        let submission: Submission = serde_json::from_str(json).expect("deserialize");
        assert_eq!(submission.title, "My Vacation");
        assert!(submission.uses_music);
        assert_eq!(submission.music_source, "commercial");
        assert!(submission.footage_source.is_empty());
    }

    #[test]
    fn thumbnail_presence_follows_handle() {
        let submission = Submission {
            thumbnail_file: Some(PathBuf::from("thumb.png")),
            ..Submission::default()
        };
        assert!(submission.has_thumbnail());
    }

    #[test]
    fn dimension_names_are_lowercase() {
        assert_eq!(Dimension::Thumbnail.as_str(), "thumbnail");
        assert_eq!(Dimension::Title.as_str(), "title");
    }
}
