use super::domain::{round_score, ScoreRecord};
use super::views::AnalyticsSnapshot;

pub fn summarize_scores(scores: &[ScoreRecord]) -> AnalyticsSnapshot {
    if scores.is_empty() {
        return AnalyticsSnapshot::default();
    }

    let total_jobs = scores.len();
    let total: f64 = scores.iter().map(|score| score.overall_score).sum();
    let best = scores
        .iter()
        .map(|score| score.overall_score)
        .fold(f64::NEG_INFINITY, f64::max);
    let worst = scores
        .iter()
        .map(|score| score.overall_score)
        .fold(f64::INFINITY, f64::min);

    AnalyticsSnapshot {
        total_jobs,
        average_score: round_score(total / total_jobs as f64),
        best_score: round_score(best),
        improvement: round_score(best - worst),
    }
}

/// Mean of one score dimension; zero for an empty slice.
pub(crate) fn mean_of<F>(scores: &[ScoreRecord], field: F) -> f64
where
    F: Fn(&ScoreRecord) -> f64,
{
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().map(field).sum::<f64>() / scores.len() as f64
}
