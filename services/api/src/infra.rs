use metrics_exporter_prometheus::PrometheusHandle;
use resume_insights::config::StorageConfig;
use resume_insights::source::{DirectorySnapshotSource, SnapshotSource};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type SharedSource = Arc<dyn SnapshotSource>;

pub(crate) fn snapshot_source(storage: &StorageConfig) -> SharedSource {
    Arc::new(DirectorySnapshotSource::new(storage.data_dir.clone()))
}
