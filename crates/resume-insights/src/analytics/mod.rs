mod dashboard;
pub mod distribution;
pub mod domain;
pub mod recommendations;
pub mod skills;
pub mod stats;
pub mod views;

#[cfg(test)]
pub(crate) mod test_support;

pub use dashboard::{experience_level_label, skill_coverage_label};
pub use distribution::bucket_scores;
pub use domain::{
    JobPostSummary, RecommendationKind, ResumeId, ResumeProfile, ResumeSnapshot, ScoreRecord,
    ScoreTier,
};
pub use recommendations::{RecommendationEngine, RecommendationThresholds};
pub use skills::{rank_missing_skills, rank_top_skills, MISSING_SKILL_LIMIT, TOP_SKILL_LIMIT};
pub use stats::summarize_scores;
pub use views::{
    AnalyticsDashboard, AnalyticsSnapshot, MissingSkillEntry, ProfileOverview, RecentJobView,
    Recommendation, ScoreDistributionBucket, SkillFrequencyEntry,
};
