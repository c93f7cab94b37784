use crate::analytics::{ResumeId, ResumeProfile, ResumeSnapshot, ScoreRecord};
use crate::import::{SnapshotImportError, SnapshotImporter};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Error enumeration for snapshot fetch failures.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("no data found for resume {0}")]
    NotFound(ResumeId),
    #[error(transparent)]
    Import(#[from] SnapshotImportError),
}

/// Data-access abstraction so the dashboard can be served from any backend.
pub trait SnapshotSource: Send + Sync {
    fn resume_profile(&self, id: &ResumeId) -> Result<ResumeProfile, SourceError>;
    fn score_records(&self, id: &ResumeId) -> Result<Vec<ScoreRecord>, SourceError>;
}

/// Fetches the snapshot for one résumé activation.
///
/// A failing profile fetch is returned to the caller. A failing score fetch is
/// logged and replaced by an empty list so the analytics core always receives
/// a complete snapshot.
pub fn load_snapshot<S>(source: &S, id: &ResumeId) -> Result<ResumeSnapshot, SourceError>
where
    S: SnapshotSource + ?Sized,
{
    let profile = source.resume_profile(id)?;
    let scores = match source.score_records(id) {
        Ok(scores) => scores,
        Err(err) => {
            warn!(resume_id = %id, error = %err, "score records unavailable, continuing without them");
            Vec::new()
        }
    };

    debug!(resume_id = %id, scores = scores.len(), "loaded resume snapshot");
    Ok(ResumeSnapshot::new(profile, scores))
}

/// Reads `resumes/<id>.json` and `scores/<id>.json` (or `.csv`) under a root directory.
#[derive(Debug, Clone)]
pub struct DirectorySnapshotSource {
    root: PathBuf,
}

impl DirectorySnapshotSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn existing(&self, folder: &str, id: &ResumeId, extension: &str) -> Option<PathBuf> {
        if !is_safe_id(id) {
            return None;
        }
        let path = self
            .root
            .join(folder)
            .join(format!("{}.{}", id.as_str(), extension));
        path.is_file().then_some(path)
    }
}

impl SnapshotSource for DirectorySnapshotSource {
    fn resume_profile(&self, id: &ResumeId) -> Result<ResumeProfile, SourceError> {
        let path = self
            .existing("resumes", id, "json")
            .ok_or_else(|| SourceError::NotFound(id.clone()))?;
        Ok(SnapshotImporter::resume_from_path(path)?)
    }

    fn score_records(&self, id: &ResumeId) -> Result<Vec<ScoreRecord>, SourceError> {
        let path = self
            .existing("scores", id, "json")
            .or_else(|| self.existing("scores", id, "csv"))
            .ok_or_else(|| SourceError::NotFound(id.clone()))?;
        Ok(SnapshotImporter::scores_from_path(path)?)
    }
}

fn is_safe_id(id: &ResumeId) -> bool {
    !id.as_str().is_empty()
        && id
            .as_str()
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
