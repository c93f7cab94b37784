use serde::{Deserialize, Serialize};

/// Cut-offs used by the advice rules. Every comparison is strict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationThresholds {
    pub minimum_ats_score: f64,
    pub minimum_skill_match_score: f64,
    pub minimum_experience_score: f64,
    pub minimum_jobs_analyzed: usize,
    pub high_match_score: f64,
    pub missing_skill_focus: usize,
}

impl RecommendationThresholds {
    pub fn standard() -> Self {
        Self {
            minimum_ats_score: 60.0,
            minimum_skill_match_score: 70.0,
            minimum_experience_score: 60.0,
            minimum_jobs_analyzed: 5,
            high_match_score: 80.0,
            missing_skill_focus: 3,
        }
    }
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self::standard()
    }
}
