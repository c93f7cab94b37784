use super::super::domain::{RecommendationKind, ScoreRecord};
use super::super::stats::mean_of;
use super::super::views::{AnalyticsSnapshot, Recommendation};
use super::config::RecommendationThresholds;

pub(crate) struct ScoreSignals {
    pub avg_ats: f64,
    pub avg_skill_match: f64,
    pub avg_experience: f64,
    pub best_overall: f64,
    pub high_match_jobs: usize,
}

pub(crate) fn collect_signals(
    scores: &[ScoreRecord],
    thresholds: &RecommendationThresholds,
) -> ScoreSignals {
    ScoreSignals {
        avg_ats: mean_of(scores, |score| score.ats_score),
        avg_skill_match: mean_of(scores, |score| score.skill_match_score),
        avg_experience: mean_of(scores, |score| score.experience_score),
        best_overall: scores
            .iter()
            .map(|score| score.overall_score)
            .fold(f64::NEG_INFINITY, f64::max),
        high_match_jobs: scores
            .iter()
            .filter(|score| score.overall_score > thresholds.high_match_score)
            .count(),
    }
}

/// Applies the advice rules in their display order. Returns an empty list when
/// nothing fired; the caller decides on the fallback.
pub(crate) fn apply_rules(
    snapshot: &AnalyticsSnapshot,
    signals: &ScoreSignals,
    top_missing: &[String],
    thresholds: &RecommendationThresholds,
) -> Vec<Recommendation> {
    let mut advice = Vec::new();

    if signals.avg_ats < thresholds.minimum_ats_score {
        advice.push(recommendation(
            RecommendationKind::ImproveAts,
            format!(
                "Your average ATS score is {:.0}%. Add more relevant keywords from job descriptions to your resume.",
                signals.avg_ats.round()
            ),
        ));
    }

    if signals.avg_skill_match < thresholds.minimum_skill_match_score && !top_missing.is_empty() {
        advice.push(recommendation(
            RecommendationKind::DevelopSkills,
            format!(
                "Focus on learning: {}. These skills appear frequently in your target jobs.",
                top_missing.join(", ")
            ),
        ));
    }

    if signals.avg_experience < thresholds.minimum_experience_score {
        advice.push(recommendation(
            RecommendationKind::HighlightExperience,
            format!(
                "Your experience score is {:.0}%. Better showcase your projects, internships, and relevant work experience.",
                signals.avg_experience.round()
            ),
        ));
    }

    if snapshot.total_jobs < thresholds.minimum_jobs_analyzed {
        advice.push(recommendation(
            RecommendationKind::AnalyzeMoreJobs,
            "Analyze more job postings to get better insights and improve your resume targeting."
                .to_string(),
        ));
    }

    if signals.best_overall > thresholds.high_match_score {
        advice.push(recommendation(
            RecommendationKind::ApplyHighMatch,
            format!(
                "You have {} jobs with {:.0}%+ match. Focus on applying to these positions.",
                signals.high_match_jobs, thresholds.high_match_score
            ),
        ));
    }

    advice
}

pub(crate) fn recommendation(kind: RecommendationKind, description: String) -> Recommendation {
    Recommendation {
        kind,
        title: kind.label(),
        description,
    }
}
