use super::domain::{JobPostSummary, ResumeId, ResumeProfile, ScoreRecord};
use chrono::{TimeZone, Utc};

pub(crate) fn skills(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

pub(crate) fn record_with_scores(
    overall: f64,
    ats: f64,
    skill_match: f64,
    experience: f64,
) -> ScoreRecord {
    ScoreRecord {
        job_id: "job-1".to_string(),
        job_title: "Backend Engineer".to_string(),
        company: "Northwind".to_string(),
        overall_score: overall,
        ats_score: ats,
        skill_match_score: skill_match,
        experience_score: experience,
        missing_skills: Vec::new(),
        recommendations: Vec::new(),
        job_post: None,
    }
}

pub(crate) fn record_with_overall(overall: f64) -> ScoreRecord {
    record_with_scores(overall, overall, overall, overall)
}

pub(crate) fn record_requiring(required: &[&str]) -> ScoreRecord {
    ScoreRecord {
        job_post: Some(JobPostSummary {
            skills_required: skills(required),
        }),
        ..record_with_overall(70.0)
    }
}

pub(crate) fn record_missing(missing: &[&str]) -> ScoreRecord {
    ScoreRecord {
        missing_skills: skills(missing),
        ..record_with_overall(70.0)
    }
}

pub(crate) fn profile_with_skills(names: &[&str]) -> ResumeProfile {
    ResumeProfile {
        id: ResumeId::new("42"),
        email: "jordan@example.com".to_string(),
        skills: skills(names),
        experience_years: 3.0,
        uploaded_at: Utc
            .with_ymd_and_hms(2025, 3, 14, 9, 30, 0)
            .single()
            .expect("valid upload timestamp"),
    }
}
