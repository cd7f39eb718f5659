//! Keyword tables that drive dimension classification.
//!
//! Each dimension is classified by an ordered ladder of substring rules. The
//! first rule whose keyword set matches wins; input that matches nothing
//! (including the empty string) falls through to the ladder's default rung,
//! so classification is total. The title and description ladders lowercase
//! their haystack first; the provenance ladders match the raw source string,
//! so `"Commercial"` does not match `commercial`.

use crate::domain::RiskLevel;

/// A substring rule: fires when any keyword occurs in the lower-cased input.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    /// Lower-cased keywords checked by containment.
    pub keywords: &'static [&'static str],
    /// Risk assigned when the rule fires.
    pub risk: RiskLevel,
    /// User-facing details for the fired rule.
    pub details: &'static str,
}

/// An ordered rule ladder with a default rung.
#[derive(Debug, Clone, Copy)]
pub struct RuleSet {
    /// Rules evaluated top to bottom.
    pub rules: &'static [KeywordRule],
    /// Risk when no rule fires.
    pub default_risk: RiskLevel,
    /// Details when no rule fires.
    pub default_details: &'static str,
    /// Whether to lowercase the haystack before matching.
    pub case_insensitive: bool,
}

impl RuleSet {
    /// Classify free-form input against the ladder.
    pub fn classify(&self, input: &str) -> (RiskLevel, &'static str) {
        let lowered;
        let haystack = if self.case_insensitive {
            lowered = input.to_lowercase();
            lowered.as_str()
        } else {
            input
        };
        for rule in self.rules {
            if contains_any(haystack, rule.keywords) {
                return (rule.risk, rule.details);
            }
        }
        (self.default_risk, self.default_details)
    }
}

/// Whether the haystack contains any of the keywords. Callers own any
/// case normalization of the haystack.
pub fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| haystack.contains(keyword))
}

/// Title terms that frequently collide with trademarks.
pub const TITLE: RuleSet = RuleSet {
    rules: &[KeywordRule {
        keywords: &["official", "trailer", "movie", "disney", "marvel", "nintendo"],
        risk: RiskLevel::Medium,
        details: "Contains potentially trademarked terms",
    }],
    default_risk: RiskLevel::Low,
    default_details: "Title appears safe",
    case_insensitive: true,
};

/// Description terms worth an attribution reminder. Cosmetic only: both
/// rungs classify as low, so this ladder never changes any outcome.
pub const DESCRIPTION: RuleSet = RuleSet {
    rules: &[KeywordRule {
        keywords: &["copyright", "\u{a9}", "all rights reserved", "trademark"],
        risk: RiskLevel::Low,
        details: "Contains copyright-related terms - ensure proper attribution",
    }],
    default_risk: RiskLevel::Low,
    default_details: "Description appears safe",
    case_insensitive: true,
};

/// Music provenance ladder. An unrecognized source is worse than a
/// recognized royalty-free one, hence the medium default.
pub const MUSIC_SOURCE: RuleSet = RuleSet {
    rules: &[
        KeywordRule {
            keywords: &["commercial", "popular"],
            risk: RiskLevel::High,
            details: "Commercial music detected - high risk of copyright claims",
        },
        KeywordRule {
            keywords: &["stock", "royalty-free"],
            risk: RiskLevel::Low,
            details: "Royalty-free music - verify licensing terms",
        },
    ],
    default_risk: RiskLevel::Medium,
    default_details: "Music source unclear - verify copyright status",
    case_insensitive: false,
};

/// Footage provenance ladder.
pub const FOOTAGE_SOURCE: RuleSet = RuleSet {
    rules: &[
        KeywordRule {
            keywords: &["movie", "tv"],
            risk: RiskLevel::High,
            details: "Movie/TV footage - likely copyrighted",
        },
        KeywordRule {
            keywords: &["stock"],
            risk: RiskLevel::Medium,
            details: "Stock footage - verify licensing",
        },
    ],
    default_risk: RiskLevel::Low,
    default_details: "Footage source appears safe",
    case_insensitive: false,
};

/// External text provenance ladder.
pub const TEXT_SOURCE: RuleSet = RuleSet {
    rules: &[KeywordRule {
        keywords: &["book", "article"],
        risk: RiskLevel::Medium,
        details: "Text from published works - verify fair use or permissions",
    }],
    default_risk: RiskLevel::Low,
    default_details: "Text content appears original",
    case_insensitive: false,
};
