mod config;
mod rules;

pub use config::RecommendationThresholds;

use super::domain::{RecommendationKind, ScoreRecord};
use super::views::{AnalyticsSnapshot, Recommendation};
use rules::{apply_rules, collect_signals, recommendation};

/// Stateless rule engine turning aggregated scores into ordered advice.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    thresholds: RecommendationThresholds,
}

impl RecommendationEngine {
    pub fn new(thresholds: RecommendationThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &RecommendationThresholds {
        &self.thresholds
    }

    /// Produces advice in rule order. `top_missing` is trimmed to the configured focus size.
    pub fn generate(
        &self,
        snapshot: &AnalyticsSnapshot,
        scores: &[ScoreRecord],
        top_missing: &[String],
    ) -> Vec<Recommendation> {
        if scores.is_empty() {
            return vec![recommendation(
                RecommendationKind::StartAnalysis,
                "Search and analyze jobs to get personalized recommendations based on your resume"
                    .to_string(),
            )];
        }

        let focus = &top_missing[..top_missing.len().min(self.thresholds.missing_skill_focus)];
        let signals = collect_signals(scores, &self.thresholds);
        let advice = apply_rules(snapshot, &signals, focus, &self.thresholds);

        if advice.is_empty() {
            return vec![recommendation(
                RecommendationKind::GreatProgress,
                "Your resume shows good alignment with job requirements. Keep analyzing more positions to find the best matches."
                    .to_string(),
            )];
        }

        advice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::stats::summarize_scores;
    use crate::analytics::test_support::record_with_scores;

    fn engine() -> RecommendationEngine {
        RecommendationEngine::new(RecommendationThresholds::standard())
    }

    fn kinds(advice: &[Recommendation]) -> Vec<RecommendationKind> {
        advice.iter().map(|rec| rec.kind).collect()
    }

    fn missing(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn empty_scores_only_suggest_starting_analysis() {
        let advice = engine().generate(&AnalyticsSnapshot::default(), &[], &missing(&["rust"]));
        assert_eq!(kinds(&advice), vec![RecommendationKind::StartAnalysis]);
        assert_eq!(advice[0].title, "Start Job Analysis");
    }

    #[test]
    fn weak_scores_fire_rules_in_evaluation_order() {
        let scores = vec![
            record_with_scores(50.0, 50.0, 40.0, 50.0),
            record_with_scores(60.0, 60.0, 60.0, 60.0),
        ];
        let snapshot = summarize_scores(&scores);
        let top = missing(&["python", "sql", "aws", "go"]);
        let advice = engine().generate(&snapshot, &scores, &top);

        assert_eq!(
            kinds(&advice),
            vec![
                RecommendationKind::ImproveAts,
                RecommendationKind::DevelopSkills,
                RecommendationKind::HighlightExperience,
                RecommendationKind::AnalyzeMoreJobs,
            ]
        );
        assert_eq!(
            advice[0].description,
            "Your average ATS score is 55%. Add more relevant keywords from job descriptions to your resume."
        );
        assert!(advice[1].description.starts_with("Focus on learning: python, sql, aws."));
        assert!(advice[2].description.starts_with("Your experience score is 55%."));
    }

    #[test]
    fn thresholds_are_strict() {
        let scores: Vec<_> = (0..5)
            .map(|_| record_with_scores(80.0, 60.0, 70.0, 60.0))
            .collect();
        let snapshot = summarize_scores(&scores);
        let advice = engine().generate(&snapshot, &scores, &missing(&["python"]));
        assert_eq!(kinds(&advice), vec![RecommendationKind::GreatProgress]);
    }

    #[test]
    fn ats_exactly_at_threshold_does_not_trigger() {
        let scores = vec![
            record_with_scores(70.0, 50.0, 90.0, 90.0),
            record_with_scores(70.0, 70.0, 90.0, 90.0),
        ];
        let snapshot = summarize_scores(&scores);
        let advice = engine().generate(&snapshot, &scores, &[]);
        assert!(!kinds(&advice).contains(&RecommendationKind::ImproveAts));
    }

    #[test]
    fn skill_advice_requires_missing_skills() {
        let scores = vec![record_with_scores(70.0, 90.0, 20.0, 90.0)];
        let snapshot = summarize_scores(&scores);
        let advice = engine().generate(&snapshot, &scores, &[]);
        assert_eq!(kinds(&advice), vec![RecommendationKind::AnalyzeMoreJobs]);
    }

    #[test]
    fn high_match_jobs_are_counted() {
        let scores = vec![
            record_with_scores(92.0, 90.0, 90.0, 90.0),
            record_with_scores(81.0, 90.0, 90.0, 90.0),
            record_with_scores(80.0, 90.0, 90.0, 90.0),
        ];
        let snapshot = summarize_scores(&scores);
        let advice = engine().generate(&snapshot, &scores, &[]);
        assert_eq!(
            kinds(&advice),
            vec![
                RecommendationKind::AnalyzeMoreJobs,
                RecommendationKind::ApplyHighMatch,
            ]
        );
        assert_eq!(
            advice[1].description,
            "You have 2 jobs with 80%+ match. Focus on applying to these positions."
        );
    }

    #[test]
    fn generation_is_deterministic() {
        let scores = vec![record_with_scores(45.0, 30.0, 30.0, 30.0)];
        let snapshot = summarize_scores(&scores);
        let top = missing(&["kubernetes"]);
        assert_eq!(
            engine().generate(&snapshot, &scores, &top),
            engine().generate(&snapshot, &scores, &top)
        );
    }
}
