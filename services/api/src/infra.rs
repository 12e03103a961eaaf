use gate_access::error::AppError;
use gate_access::roster::{Roster, RosterImporter, StatusFilter};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum RosterSource {
    File,
    Upload,
    Sample,
}

impl RosterSource {
    pub(crate) const fn label(self) -> &'static str {
        match self {
            Self::File => "roster file",
            Self::Upload => "uploaded roster",
            Self::Sample => "built-in sample roster",
        }
    }
}

pub(crate) fn load_roster(path: Option<PathBuf>) -> Result<(Roster, RosterSource), AppError> {
    match path {
        Some(path) => RosterImporter::from_path(path)
            .map(|roster| (roster, RosterSource::File))
            .map_err(AppError::from),
        None => {
            let roster = Roster::sample();
            info!(vehicles = roster.len(), "using built-in sample roster");
            Ok((roster, RosterSource::Sample))
        }
    }
}

pub(crate) fn parse_status(raw: &str) -> Result<StatusFilter, String> {
    StatusFilter::parse(raw).ok_or_else(|| {
        format!(
            "unknown status '{raw}' (expected one of {})",
            StatusFilter::accepted_labels()
        )
    })
}
