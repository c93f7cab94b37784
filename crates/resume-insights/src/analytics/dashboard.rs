use super::distribution::bucket_scores;
use super::domain::{round_score, ResumeProfile, ResumeSnapshot, ScoreRecord};
use super::recommendations::RecommendationEngine;
use super::skills::{rank_missing_skills, rank_top_skills};
use super::stats::summarize_scores;
use super::views::{AnalyticsDashboard, ProfileOverview, RecentJobView};

const RECENT_JOB_LIMIT: usize = 5;
const PROFILE_TOP_SKILLS: usize = 3;
const JOB_RECOMMENDATION_PREVIEW: usize = 2;
const JOB_MISSING_SKILL_PREVIEW: usize = 5;

impl AnalyticsDashboard {
    pub fn build(snapshot: &ResumeSnapshot) -> Self {
        Self::build_with(snapshot, &RecommendationEngine::default())
    }

    pub fn build_with(snapshot: &ResumeSnapshot, engine: &RecommendationEngine) -> Self {
        let ResumeSnapshot { profile, scores } = snapshot;

        let stats = summarize_scores(scores);
        let top_skills = rank_top_skills(&profile.skills, scores);
        let distribution = bucket_scores(scores);
        let missing_skills = rank_missing_skills(scores);
        let top_missing: Vec<String> = missing_skills
            .iter()
            .take(engine.thresholds().missing_skill_focus)
            .map(|entry| entry.name.clone())
            .collect();
        let recommendations = engine.generate(&stats, scores, &top_missing);

        Self {
            profile: profile_overview(profile, scores.len()),
            stats,
            top_skills,
            distribution,
            missing_skills,
            recommendations,
            recent_jobs: scores
                .iter()
                .take(RECENT_JOB_LIMIT)
                .map(recent_job)
                .collect(),
        }
    }
}

impl ResumeSnapshot {
    pub fn dashboard(&self) -> AnalyticsDashboard {
        AnalyticsDashboard::build(self)
    }
}

pub fn skill_coverage_label(skill_count: usize) -> &'static str {
    if skill_count > 10 {
        "Comprehensive"
    } else if skill_count > 5 {
        "Good coverage"
    } else {
        "Limited skills"
    }
}

pub fn experience_level_label(years: f64) -> &'static str {
    if years >= 5.0 {
        "Senior"
    } else if years >= 2.0 {
        "Mid-level"
    } else {
        "Entry-level"
    }
}

fn profile_overview(profile: &ResumeProfile, jobs_analyzed: usize) -> ProfileOverview {
    ProfileOverview {
        resume_id: profile.id.clone(),
        email: profile.email.clone(),
        skill_count: profile.skills.len(),
        skill_coverage: skill_coverage_label(profile.skills.len()),
        experience_years: profile.experience_years,
        experience_level: experience_level_label(profile.experience_years),
        uploaded_on: profile.uploaded_at.date_naive(),
        jobs_analyzed,
        top_skills: profile
            .skills
            .iter()
            .take(PROFILE_TOP_SKILLS)
            .cloned()
            .collect(),
    }
}

fn recent_job(score: &ScoreRecord) -> RecentJobView {
    RecentJobView {
        job_id: score.job_id.clone(),
        job_title: non_blank_or(&score.job_title, "Job Title"),
        company: non_blank_or(&score.company, "Company"),
        overall_score: round_score(score.overall_score),
        ats_score: round_score(score.ats_score),
        skill_match_score: round_score(score.skill_match_score),
        experience_score: round_score(score.experience_score),
        recommendations: score
            .recommendations
            .iter()
            .take(JOB_RECOMMENDATION_PREVIEW)
            .cloned()
            .collect(),
        missing_skills: score
            .missing_skills
            .iter()
            .take(JOB_MISSING_SKILL_PREVIEW)
            .cloned()
            .collect(),
        additional_missing_skills: score
            .missing_skills
            .len()
            .saturating_sub(JOB_MISSING_SKILL_PREVIEW),
    }
}

fn non_blank_or(value: &str, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::domain::RecommendationKind;
    use crate::analytics::test_support::{profile_with_skills, record_missing};

    #[test]
    fn coverage_and_level_labels_follow_thresholds() {
        assert_eq!(skill_coverage_label(11), "Comprehensive");
        assert_eq!(skill_coverage_label(10), "Good coverage");
        assert_eq!(skill_coverage_label(5), "Limited skills");
        assert_eq!(experience_level_label(5.0), "Senior");
        assert_eq!(experience_level_label(2.0), "Mid-level");
        assert_eq!(experience_level_label(1.5), "Entry-level");
    }

    #[test]
    fn empty_snapshot_builds_a_total_dashboard() {
        let snapshot = ResumeSnapshot::new(profile_with_skills(&["Rust", "SQL"]), Vec::new());
        let dashboard = snapshot.dashboard();

        assert_eq!(dashboard.stats.total_jobs, 0);
        assert_eq!(dashboard.top_skills.len(), 2);
        assert!(dashboard.distribution.is_empty());
        assert!(dashboard.missing_skills.is_empty());
        assert!(dashboard.recent_jobs.is_empty());
        assert_eq!(dashboard.recommendations.len(), 1);
        assert_eq!(
            dashboard.recommendations[0].kind,
            RecommendationKind::StartAnalysis
        );
        assert_eq!(dashboard.profile.jobs_analyzed, 0);
        assert_eq!(dashboard.profile.top_skills, vec!["Rust", "SQL"]);
    }

    #[test]
    fn recent_jobs_preview_trims_lists_and_fills_blank_labels() {
        let mut record = record_missing(&["a", "b", "c", "d", "e", "f", "g"]);
        record.job_title = "  ".to_string();
        record.company = String::new();
        record.overall_score = 66.6;
        record.recommendations = vec!["one".into(), "two".into(), "three".into()];

        let view = recent_job(&record);
        assert_eq!(view.job_title, "Job Title");
        assert_eq!(view.company, "Company");
        assert_eq!(view.overall_score, 67);
        assert_eq!(view.recommendations, vec!["one", "two"]);
        assert_eq!(view.missing_skills.len(), 5);
        assert_eq!(view.additional_missing_skills, 2);
    }
}
