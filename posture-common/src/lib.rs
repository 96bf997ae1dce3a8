//! # Posture Common Library
//!
//! Posture evaluation core shared by the posture services:
//! - Landmark data model and name-indexed lookup
//! - Three-point joint angle geometry
//! - Per-context rule batteries (squat form, desk posture)
//! - Severity-weighted scoring and recommendation generation
//! - Configuration loading

pub mod analysis;
pub mod config;
pub mod context;
pub mod error;
pub mod geometry;
pub mod issue;
pub mod landmarks;
pub mod recommend;
pub mod rules;
pub mod scoring;

pub use analysis::{analyze, AnalysisResult};
pub use context::PostureContext;
pub use error::{Error, Result};
pub use issue::{Issue, IssueType, Severity};
pub use landmarks::{Landmark, LandmarkSet};
pub use rules::{PostureAnalyzer, RuleThresholds};
