use super::domain::{RecommendationKind, ResumeId, ScoreTier};
use chrono::NaiveDate;
use serde::Serialize;

/// Headline numbers for the analyzed jobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AnalyticsSnapshot {
    pub total_jobs: usize,
    pub average_score: u8,
    pub best_score: u8,
    pub improvement: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillFrequencyEntry {
    pub name: String,
    pub frequency_percent: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreDistributionBucket {
    pub tier: ScoreTier,
    pub label: &'static str,
    pub display_label: String,
    pub min: u8,
    pub max: u8,
    pub count: usize,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingSkillEntry {
    pub name: String,
    pub job_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub title: &'static str,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileOverview {
    pub resume_id: ResumeId,
    pub email: String,
    pub skill_count: usize,
    pub skill_coverage: &'static str,
    pub experience_years: f64,
    pub experience_level: &'static str,
    pub uploaded_on: NaiveDate,
    pub jobs_analyzed: usize,
    pub top_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentJobView {
    pub job_id: String,
    pub job_title: String,
    pub company: String,
    pub overall_score: u8,
    pub ats_score: u8,
    pub skill_match_score: u8,
    pub experience_score: u8,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing_skills: Vec<String>,
    pub additional_missing_skills: usize,
}

/// Composite payload rendered by the analytics page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsDashboard {
    pub profile: ProfileOverview,
    pub stats: AnalyticsSnapshot,
    pub top_skills: Vec<SkillFrequencyEntry>,
    pub distribution: Vec<ScoreDistributionBucket>,
    pub missing_skills: Vec<MissingSkillEntry>,
    pub recommendations: Vec<Recommendation>,
    pub recent_jobs: Vec<RecentJobView>,
}
