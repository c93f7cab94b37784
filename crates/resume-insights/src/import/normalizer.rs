use super::parser::{RawResumeDocument, RawScoreRow};
use super::SnapshotImportError;
use crate::analytics::{JobPostSummary, ResumeId, ResumeProfile, ScoreRecord};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

pub(crate) fn normalize_resume(
    document: RawResumeDocument,
) -> Result<ResumeProfile, SnapshotImportError> {
    let RawResumeDocument {
        resume,
        analysis,
        meta,
        flat_analysis,
    } = document;
    let nested = resume.unwrap_or_default();
    let analysis = analysis.unwrap_or_default();

    let id = nested
        .id
        .or(meta.id)
        .map(|id| id.into_string())
        .filter(|id| !id.is_empty())
        .ok_or(SnapshotImportError::MissingField("id"))?;

    let email = nested
        .user_email
        .or(meta.user_email)
        .map(|email| email.trim().to_string())
        .unwrap_or_default();

    let uploaded_at = nested
        .uploaded_at
        .or(meta.uploaded_at)
        .as_deref()
        .and_then(parse_timestamp)
        .unwrap_or_default();

    let skills = analysis
        .skills
        .or(flat_analysis.skills)
        .map(clean_list)
        .unwrap_or_default();

    let experience_years = analysis
        .experience_years
        .or(flat_analysis.experience_years)
        .filter(|years| years.is_finite())
        .map(|years| years.max(0.0))
        .unwrap_or(0.0);

    Ok(ResumeProfile {
        id: ResumeId::new(id),
        email,
        skills,
        experience_years,
        uploaded_at,
    })
}

pub(crate) fn normalize_score(row: RawScoreRow) -> ScoreRecord {
    let job_post = row.job_post.unwrap_or_default();

    let job_title = row
        .job_title
        .or(job_post.title)
        .map(|title| title.trim().to_string())
        .unwrap_or_default();
    let company = row
        .company
        .or(job_post.company)
        .map(|company| company.trim().to_string())
        .unwrap_or_default();

    ScoreRecord {
        job_id: row.job_id.map(|id| id.into_string()).unwrap_or_default(),
        job_title,
        company,
        overall_score: clamp_score(row.overall_score),
        ats_score: clamp_score(row.ats_score),
        skill_match_score: clamp_score(row.skill_match_score),
        experience_score: clamp_score(row.experience_score),
        missing_skills: row.missing_skills.map(clean_list).unwrap_or_default(),
        recommendations: row.recommendations.unwrap_or_default(),
        job_post: job_post.skills_required.map(|skills| JobPostSummary {
            skills_required: clean_list(skills),
        }),
    }
}

fn clamp_score(value: Option<f64>) -> f64 {
    value
        .filter(|score| score.is_finite())
        .map(|score| score.clamp(0.0, 100.0))
        .unwrap_or(0.0)
}

/// Trims skill names and drops blanks; duplicates are kept in order.
fn clean_list(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect()
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.and_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }

    None
}
