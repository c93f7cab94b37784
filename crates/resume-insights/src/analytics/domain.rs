use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an uploaded résumé as issued by the scoring backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResumeId(pub String);

impl ResumeId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResumeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonical résumé profile handed to the analytics core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeProfile {
    pub id: ResumeId,
    pub email: String,
    pub skills: Vec<String>,
    pub experience_years: f64,
    pub uploaded_at: DateTime<Utc>,
}

/// Job posting metadata embedded in a score record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobPostSummary {
    #[serde(default)]
    pub skills_required: Vec<String>,
}

/// Result of matching one résumé against one job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub job_id: String,
    pub job_title: String,
    pub company: String,
    pub overall_score: f64,
    pub ats_score: f64,
    pub skill_match_score: f64,
    pub experience_score: f64,
    #[serde(default)]
    pub missing_skills: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_post: Option<JobPostSummary>,
}

impl ScoreRecord {
    /// Required skills of the embedded job post, empty when the post is absent.
    pub fn required_skills(&self) -> &[String] {
        self.job_post
            .as_ref()
            .map(|post| post.skills_required.as_slice())
            .unwrap_or(&[])
    }
}

/// Immutable input for one dashboard activation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeSnapshot {
    pub profile: ResumeProfile,
    pub scores: Vec<ScoreRecord>,
}

impl ResumeSnapshot {
    pub fn new(profile: ResumeProfile, scores: Vec<ScoreRecord>) -> Self {
        Self { profile, scores }
    }
}

/// Performance tier used by the score distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl ScoreTier {
    pub const fn ordered() -> [Self; 4] {
        [Self::Poor, Self::Fair, Self::Good, Self::Excellent]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Poor => "Poor",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }

    /// Inclusive integer bounds of the tier.
    pub const fn range(self) -> (u8, u8) {
        match self {
            Self::Poor => (0, 40),
            Self::Fair => (41, 60),
            Self::Good => (61, 80),
            Self::Excellent => (81, 100),
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Poor => "Needs significant improvement",
            Self::Fair => "Room for improvement",
            Self::Good => "Strong match",
            Self::Excellent => "Perfect match",
        }
    }

    pub const fn contains(self, score: u8) -> bool {
        let (min, max) = self.range();
        score >= min && score <= max
    }
}

/// Identifies which advice rule produced a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    StartAnalysis,
    ImproveAts,
    DevelopSkills,
    HighlightExperience,
    AnalyzeMoreJobs,
    ApplyHighMatch,
    GreatProgress,
}

impl RecommendationKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::StartAnalysis => "Start Job Analysis",
            Self::ImproveAts => "Improve ATS Compatibility",
            Self::DevelopSkills => "Develop Key Skills",
            Self::HighlightExperience => "Highlight Experience Better",
            Self::AnalyzeMoreJobs => "Analyze More Jobs",
            Self::ApplyHighMatch => "Apply to High-Match Jobs",
            Self::GreatProgress => "Great Progress!",
        }
    }
}

/// Rounds to the nearest integer, ties away from zero, and clamps into `u8` range.
pub(crate) fn round_score(value: f64) -> u8 {
    if !value.is_finite() {
        return 0;
    }
    value.round().clamp(0.0, f64::from(u8::MAX)) as u8
}
