#![deny(missing_docs)]
//! Clearance core library.
//!
//! This crate contains the copyright risk-classification engine: keyword rule
//! tables, per-dimension analyzers, score aggregation, issue derivation, and
//! recommendation generation. It is advisory only: it reads a structured
//! submission snapshot and never inspects actual media bytes.

pub mod aggregate;
pub mod analyzer;
pub mod domain;
pub mod engine;
pub mod error;
pub mod fs;
pub mod recommend;
pub mod report;
pub mod resources;
/// Keyword rule tables and substring matching.
pub mod rules;

pub use aggregate::{derive_issues, overall_risk, risk_score};
pub use analyzer::analyze_dimensions;
pub use domain::{
    AnalysisReport, Dimension, DimensionAnalysis, DimensionVerdict, Issue, Recommendation,
    RiskLevel, Submission,
};
pub use engine::analyze;
pub use error::{ClearanceError, Result};
pub use fs::{FileSystem, StdFileSystem, load_submission};
pub use recommend::generate_recommendations;
pub use report::{render_json, render_markdown, render_text};
pub use resources::{REFERENCE_LINKS, ReferenceLink};
