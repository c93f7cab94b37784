use super::domain::{round_score, ScoreRecord, ScoreTier};
use super::views::ScoreDistributionBucket;
use std::collections::HashMap;

/// Buckets overall scores into the fixed performance tiers.
///
/// Scores are rounded to the nearest integer and clamped to 0..=100 before
/// classification, so fractional values between tier bounds (e.g. 40.5) are
/// never dropped. Only tiers with at least one score are returned.
pub fn bucket_scores(scores: &[ScoreRecord]) -> Vec<ScoreDistributionBucket> {
    if scores.is_empty() {
        return Vec::new();
    }

    let mut counts: HashMap<ScoreTier, usize> = HashMap::new();
    for score in scores {
        let rounded = round_score(score.overall_score).min(100);
        if let Some(tier) = ScoreTier::ordered()
            .into_iter()
            .find(|tier| tier.contains(rounded))
        {
            *counts.entry(tier).or_insert(0) += 1;
        }
    }

    ScoreTier::ordered()
        .into_iter()
        .filter_map(|tier| {
            counts.get(&tier).map(|&count| {
                let (min, max) = tier.range();
                ScoreDistributionBucket {
                    tier,
                    label: tier.label(),
                    display_label: format!("{} ({}-{}%)", tier.label(), min, max),
                    min,
                    max,
                    count,
                    description: tier.description(),
                }
            })
        })
        .collect()
}
