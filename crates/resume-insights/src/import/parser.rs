use serde::{Deserialize, Deserializer};
use std::io::Read;

/// Backend identifiers arrive as either JSON numbers or strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawId {
    Number(u64),
    Text(String),
}

impl RawId {
    pub(crate) fn into_string(self) -> String {
        match self {
            RawId::Number(value) => value.to_string(),
            RawId::Text(value) => value.trim().to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawResumeMeta {
    #[serde(default)]
    pub(crate) id: Option<RawId>,
    #[serde(default, alias = "email")]
    pub(crate) user_email: Option<String>,
    #[serde(default)]
    pub(crate) uploaded_at: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawAnalysis {
    #[serde(default)]
    pub(crate) skills: Option<Vec<String>>,
    #[serde(default)]
    pub(crate) experience_years: Option<f64>,
}

/// Résumé payload in either the nested analysis layout or the flat layout.
#[derive(Debug, Deserialize)]
pub(crate) struct RawResumeDocument {
    #[serde(default)]
    pub(crate) resume: Option<RawResumeMeta>,
    #[serde(default)]
    pub(crate) analysis: Option<RawAnalysis>,
    #[serde(flatten)]
    pub(crate) meta: RawResumeMeta,
    #[serde(flatten)]
    pub(crate) flat_analysis: RawAnalysis,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawJobPost {
    #[serde(default)]
    pub(crate) title: Option<String>,
    #[serde(default)]
    pub(crate) company: Option<String>,
    #[serde(default)]
    pub(crate) skills_required: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawScoreRow {
    #[serde(default, alias = "job")]
    pub(crate) job_id: Option<RawId>,
    #[serde(default)]
    pub(crate) job_title: Option<String>,
    #[serde(default)]
    pub(crate) company: Option<String>,
    #[serde(default)]
    pub(crate) overall_score: Option<f64>,
    #[serde(default)]
    pub(crate) ats_score: Option<f64>,
    #[serde(default)]
    pub(crate) skill_match_score: Option<f64>,
    #[serde(default)]
    pub(crate) experience_score: Option<f64>,
    #[serde(default)]
    pub(crate) missing_skills: Option<Vec<String>>,
    #[serde(default)]
    pub(crate) recommendations: Option<Vec<String>>,
    #[serde(default)]
    pub(crate) job_post: Option<RawJobPost>,
}

#[derive(Debug, Deserialize)]
struct CsvScoreRow {
    job_id: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    job_title: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    company: Option<String>,
    #[serde(default)]
    overall_score: Option<f64>,
    #[serde(default)]
    ats_score: Option<f64>,
    #[serde(default)]
    skill_match_score: Option<f64>,
    #[serde(default)]
    experience_score: Option<f64>,
    #[serde(default)]
    missing_skills: String,
    #[serde(default)]
    skills_required: String,
    #[serde(default)]
    recommendations: String,
}

impl CsvScoreRow {
    fn into_raw(self) -> RawScoreRow {
        RawScoreRow {
            job_id: Some(RawId::Text(self.job_id)),
            job_title: self.job_title,
            company: self.company,
            overall_score: self.overall_score,
            ats_score: self.ats_score,
            skill_match_score: self.skill_match_score,
            experience_score: self.experience_score,
            missing_skills: Some(split_list(&self.missing_skills)),
            recommendations: Some(split_list(&self.recommendations)),
            job_post: Some(RawJobPost {
                skills_required: Some(split_list(&self.skills_required)),
                ..RawJobPost::default()
            }),
        }
    }
}

pub(crate) fn parse_csv_rows<R: Read>(reader: R) -> Result<Vec<RawScoreRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();

    for record in csv_reader.deserialize::<CsvScoreRow>() {
        rows.push(record?.into_raw());
    }

    Ok(rows)
}

/// Splits a `;`-separated CSV cell, dropping blank items.
fn split_list(value: &str) -> Vec<String> {
    value
        .split(';')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
