//! End-to-end scenarios for the risk-classification engine.

use clearance_core::{Dimension, RiskLevel, Submission, analyze, risk_score};

fn base_submission(title: &str) -> Submission {
    Submission {
        title: title.to_string(),
        ..Submission::default()
    }
}

#[test]
fn vacation_video_is_low_risk_with_no_issues() {
    let report = analyze(&base_submission("My Vacation"));

    assert_eq!(report.overall_risk, RiskLevel::Low);
    assert!(report.issues.is_empty());
    assert_eq!(report.recommendations.len(), 2);
    assert_eq!(report.recommendations[0].title, "Add Proper Attribution");
    assert_eq!(report.recommendations[1].title, "Monitor Content ID");
}

#[test]
fn trailer_reaction_with_commercial_music_is_high_risk() {
    let submission = Submission {
        title: "Official Trailer Reaction".to_string(),
        uses_music: true,
        music_source: "commercial".to_string(),
        uses_footage: true,
        footage_source: "stock-footage".to_string(),
        ..Submission::default()
    };

    assert_eq!(risk_score(&submission), 75);

    let report = analyze(&submission);
    assert_eq!(report.overall_risk, RiskLevel::High);
    assert_eq!(report.dimensions.music.risk, RiskLevel::High);
    assert_eq!(report.dimensions.footage.risk, RiskLevel::Medium);
    assert_eq!(report.dimensions.title.risk, RiskLevel::Medium);

    let issue_kinds: Vec<Dimension> = report.issues.iter().map(|issue| issue.kind).collect();
    assert_eq!(
        issue_kinds,
        vec![Dimension::Music, Dimension::Footage, Dimension::Title]
    );

    let titles: Vec<&str> = report
        .recommendations
        .iter()
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(
        titles,
        vec![
            "Consider Alternative Content",
            "Replace Commercial Music",
            "Modify Title",
            "Add Proper Attribution",
            "Monitor Content ID",
        ]
    );
}

#[test]
fn book_review_scores_below_medium_threshold() {
    let submission = Submission {
        has_text: true,
        text_source: "book-excerpt".to_string(),
        ..base_submission("Book Review")
    };

    assert_eq!(risk_score(&submission), 15);

    let report = analyze(&submission);
    assert_eq!(report.overall_risk, RiskLevel::Low);
    assert_eq!(report.dimensions.text.risk, RiskLevel::Medium);
    assert!(report.issues.is_empty());
    assert_eq!(report.recommendations.len(), 2);
}

#[test]
fn analysis_is_idempotent_over_one_snapshot() {
    let submission = Submission {
        title: "Official Nintendo Review".to_string(),
        uses_music: true,
        music_source: "popular".to_string(),
        has_text: true,
        text_source: "article".to_string(),
        ..Submission::default()
    };

    let first = analyze(&submission);
    let second = analyze(&submission);
    assert_eq!(first, second);
}

#[test]
fn overall_risk_ignores_description_tags_and_file_handles() {
    let plain = base_submission("My Vacation");
    let decorated = Submission {
        description: "\u{a9} all rights reserved trademark copyright".to_string(),
        tags: "disney, marvel, official".to_string(),
        video_file: Some("clip.mp4".into()),
        audio_file: Some("track.wav".into()),
        thumbnail_file: Some("thumb.png".into()),
        ..base_submission("My Vacation")
    };

    assert_eq!(risk_score(&plain), risk_score(&decorated));
    assert_eq!(
        analyze(&plain).overall_risk,
        analyze(&decorated).overall_risk
    );
}

#[test]
fn adding_a_trigger_never_decreases_the_score() {
    let base = Submission {
        title: "Trailer breakdown".to_string(),
        uses_music: true,
        music_source: "original".to_string(),
        uses_footage: true,
        footage_source: "creative-commons".to_string(),
        has_text: true,
        text_source: "original".to_string(),
        ..Submission::default()
    };
    let base_score = risk_score(&base);

    let upgrades = [
        Submission {
            music_source: "commercial".to_string(),
            ..base.clone()
        },
        Submission {
            footage_source: "stock".to_string(),
            ..base.clone()
        },
        Submission {
            text_source: "article".to_string(),
            ..base.clone()
        },
        Submission {
            title: "Official trailer breakdown".to_string(),
            ..base.clone()
        },
    ];

    for upgraded in upgrades {
        let upgraded_score = risk_score(&upgraded);
        assert!(
            upgraded_score >= base_score,
            "score dropped from {base_score} to {upgraded_score}"
        );
        assert!(analyze(&upgraded).overall_risk >= analyze(&base).overall_risk);
    }
}

#[test]
fn recommendations_always_end_with_the_two_unconditional_entries() {
    let submissions = [
        Submission::default(),
        base_submission("My Vacation"),
        Submission {
            title: "Official Trailer".to_string(),
            uses_music: true,
            music_source: "commercial-popular".to_string(),
            uses_footage: true,
            footage_source: "movie".to_string(),
            has_text: true,
            text_source: "lyrics".to_string(),
            ..Submission::default()
        },
    ];

    for submission in submissions {
        let report = analyze(&submission);
        let len = report.recommendations.len();
        assert!(len >= 2);
        assert_eq!(report.recommendations[len - 2].title, "Add Proper Attribution");
        assert_eq!(report.recommendations[len - 1].title, "Monitor Content ID");
    }
}

#[test]
fn mixed_case_music_source_stays_unclear_and_raises_nothing() {
    // Provenance matching is case-sensitive, so "Commercial" is an
    // unrecognized source: medium verdict, no issue, and no score
    // contribution. The verdicts and the score must agree on this.
    let submission = Submission {
        uses_music: true,
        music_source: "Commercial".to_string(),
        ..base_submission("My Vacation")
    };

    assert_eq!(risk_score(&submission), 0);

    let report = analyze(&submission);
    assert_eq!(report.dimensions.music.risk, RiskLevel::Medium);
    assert!(report.issues.is_empty());
    assert_eq!(report.overall_risk, RiskLevel::Low);
}

#[test]
fn issues_only_come_from_the_three_defined_triggers() {
    // Movie footage is high risk, published text is medium risk; neither has
    // an issue trigger, so the list stays empty.
    let submission = Submission {
        uses_footage: true,
        footage_source: "movie".to_string(),
        has_text: true,
        text_source: "article".to_string(),
        ..base_submission("My Vacation")
    };

    let report = analyze(&submission);
    assert_eq!(report.dimensions.footage.risk, RiskLevel::High);
    assert_eq!(report.dimensions.text.risk, RiskLevel::Medium);
    assert!(report.issues.is_empty());
}
