mod normalizer;
mod parser;

use crate::analytics::{ResumeProfile, ScoreRecord};
use normalizer::{normalize_resume, normalize_score};
use parser::{RawResumeDocument, RawScoreRow};
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Failures while turning backend payloads into canonical snapshot types.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotImportError {
    #[error("failed to read snapshot data: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON snapshot data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid score CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("résumé document is missing `{0}`")]
    MissingField(&'static str),
    #[error("expected {expected}, found {found}")]
    UnexpectedShape {
        expected: &'static str,
        found: &'static str,
    },
}

/// Normalizes the backend's résumé and score payloads at the data-access boundary.
pub struct SnapshotImporter;

impl SnapshotImporter {
    pub fn resume_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<ResumeProfile, SnapshotImportError> {
        let file = std::fs::File::open(path)?;
        Self::resume_from_reader(file)
    }

    pub fn resume_from_reader<R: Read>(reader: R) -> Result<ResumeProfile, SnapshotImportError> {
        let value: Value = serde_json::from_reader(reader)?;
        Self::resume_from_value(value)
    }

    pub fn resume_from_value(value: Value) -> Result<ResumeProfile, SnapshotImportError> {
        if !value.is_object() {
            return Err(SnapshotImportError::UnexpectedShape {
                expected: "a résumé object",
                found: json_kind(&value),
            });
        }
        let document: RawResumeDocument = serde_json::from_value(value)?;
        normalize_resume(document)
    }

    /// Reads score records, choosing CSV for `.csv` files and JSON otherwise.
    pub fn scores_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<ScoreRecord>, SnapshotImportError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);

        if is_csv {
            Self::scores_from_csv(file)
        } else {
            Self::scores_from_reader(file)
        }
    }

    pub fn scores_from_reader<R: Read>(
        reader: R,
    ) -> Result<Vec<ScoreRecord>, SnapshotImportError> {
        let value: Value = serde_json::from_reader(reader)?;
        Self::scores_from_value(value)
    }

    /// Accepts a bare array, an object with a `scores` array, or `null`.
    pub fn scores_from_value(value: Value) -> Result<Vec<ScoreRecord>, SnapshotImportError> {
        let rows = match value {
            Value::Null => return Ok(Vec::new()),
            rows @ Value::Array(_) => rows,
            Value::Object(mut map) => match map.remove("scores") {
                Some(Value::Null) => return Ok(Vec::new()),
                Some(scores @ Value::Array(_)) => scores,
                Some(other) => {
                    return Err(SnapshotImportError::UnexpectedShape {
                        expected: "a `scores` array",
                        found: json_kind(&other),
                    })
                }
                None => {
                    return Err(SnapshotImportError::UnexpectedShape {
                        expected: "a `scores` array",
                        found: "an object without `scores`",
                    })
                }
            },
            other => {
                return Err(SnapshotImportError::UnexpectedShape {
                    expected: "a score array",
                    found: json_kind(&other),
                })
            }
        };

        let rows: Vec<RawScoreRow> = serde_json::from_value(rows)?;
        Ok(rows.into_iter().map(normalize_score).collect())
    }

    pub fn scores_from_csv<R: Read>(reader: R) -> Result<Vec<ScoreRecord>, SnapshotImportError> {
        let rows = parser::parse_csv_rows(reader)?;
        Ok(rows.into_iter().map(normalize_score).collect())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_resume_fields_win_over_flat_ones() {
        let profile = SnapshotImporter::resume_from_value(json!({
            "resume": { "id": 12, "user_email": "nested@example.com" },
            "user_email": "flat@example.com",
            "uploaded_at": "2025-03-14T09:30:00Z",
            "analysis": { "skills": ["Rust", " ", "SQL "], "experience_years": 4 }
        }))
        .expect("resume normalizes");

        assert_eq!(profile.id.as_str(), "12");
        assert_eq!(profile.email, "nested@example.com");
        assert_eq!(profile.skills, vec!["Rust", "SQL"]);
        assert_eq!(profile.experience_years, 4.0);
        assert_eq!(profile.uploaded_at.to_rfc3339(), "2025-03-14T09:30:00+00:00");
    }

    #[test]
    fn nested_and_flat_layouts_import_the_same_profile() {
        let nested = SnapshotImporter::resume_from_value(json!({
            "resume": { "id": "r-7", "user_email": "sam@example.com", "uploaded_at": "2025-02-01" },
            "analysis": { "skills": ["Kotlin", "Android"], "experience_years": 2.5 }
        }))
        .expect("nested resume normalizes");
        let flat = SnapshotImporter::resume_from_value(json!({
            "id": "r-7",
            "email": "sam@example.com",
            "uploaded_at": "2025-02-01",
            "skills": ["Kotlin", "Android"],
            "experience_years": 2.5
        }))
        .expect("flat resume normalizes");
        assert_eq!(nested, flat);
    }

    #[test]
    fn resume_without_id_is_rejected() {
        let err = SnapshotImporter::resume_from_value(json!({ "user_email": "a@b.c" }))
            .expect_err("id is required");
        assert!(matches!(err, SnapshotImportError::MissingField("id")));
    }

    #[test]
    fn resume_must_be_an_object() {
        let err = SnapshotImporter::resume_from_value(json!(["not", "a", "resume"]))
            .expect_err("arrays are rejected");
        assert!(matches!(err, SnapshotImportError::UnexpectedShape { .. }));
    }

    #[test]
    fn negative_experience_is_floored_and_missing_timestamp_is_epoch() {
        let profile = SnapshotImporter::resume_from_value(json!({
            "id": "abc",
            "experience_years": -2.0
        }))
        .expect("resume normalizes");
        assert_eq!(profile.experience_years, 0.0);
        assert_eq!(profile.uploaded_at.timestamp(), 0);
        assert!(profile.skills.is_empty());
    }

    #[test]
    fn scores_accept_wrapped_and_bare_payloads() {
        let row = json!({
            "job_id": 3,
            "job_title": "Platform Engineer",
            "company": "Initech",
            "overall_score": 120.0,
            "ats_score": 55,
            "skill_match_score": 61.5,
            "experience_score": null,
            "missing_skills": ["go", "go"],
            "job_post": { "skills_required": ["go", "k8s"] }
        });

        let wrapped = SnapshotImporter::scores_from_value(json!({ "scores": [row.clone()] }))
            .expect("wrapped scores parse");
        let bare = SnapshotImporter::scores_from_value(json!([row])).expect("bare scores parse");
        assert_eq!(wrapped, bare);

        let record = &bare[0];
        assert_eq!(record.job_id, "3");
        assert_eq!(record.overall_score, 100.0);
        assert_eq!(record.experience_score, 0.0);
        assert_eq!(record.missing_skills, vec!["go", "go"]);
        assert!(record.recommendations.is_empty());
        assert_eq!(
            record.required_skills(),
            &["go".to_string(), "k8s".to_string()][..]
        );
    }

    #[test]
    fn null_scores_are_empty() {
        assert!(SnapshotImporter::scores_from_value(Value::Null)
            .expect("null is empty")
            .is_empty());
        assert!(SnapshotImporter::scores_from_value(json!({ "scores": null }))
            .expect("null scores are empty")
            .is_empty());
    }

    #[test]
    fn job_post_title_backfills_missing_job_title() {
        let scores = SnapshotImporter::scores_from_value(json!([{
            "job_id": "x1",
            "overall_score": 50,
            "job_post": { "title": "SRE", "company": "Hooli" }
        }]))
        .expect("scores parse");
        assert_eq!(scores[0].job_title, "SRE");
        assert_eq!(scores[0].company, "Hooli");
        assert!(scores[0].job_post.is_none());
    }

    #[test]
    fn csv_scores_normalize_like_json() {
        let data = "job_id,job_title,company,overall_score,ats_score,skill_match_score,experience_score,missing_skills,skills_required,recommendations\n\
9,Analyst,Globex,88,70,75,90,tableau,excel;sql,Quantify impact;Trim summary\n";
        let scores = SnapshotImporter::scores_from_csv(data.as_bytes()).expect("csv parses");
        assert_eq!(scores.len(), 1);
        assert_eq!(
            scores[0].required_skills(),
            &["excel".to_string(), "sql".to_string()][..]
        );
        assert_eq!(scores[0].recommendations, vec!["Quantify impact", "Trim summary"]);
    }
}
