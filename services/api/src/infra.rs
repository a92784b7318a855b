use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use wellbeing::scoring::{CutoffPreset, ScoringConfig};
use wellbeing::survey::QuestionCatalogue;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Read-only inputs shared by every scoring request.
#[derive(Clone)]
pub(crate) struct ScoringState {
    pub(crate) catalogue: Arc<QuestionCatalogue>,
    pub(crate) defaults: ScoringConfig,
}

impl ScoringState {
    pub(crate) fn bat12(defaults: ScoringConfig) -> Self {
        Self {
            catalogue: Arc::new(QuestionCatalogue::bat12()),
            defaults,
        }
    }
}

pub(crate) fn parse_cutoffs(raw: &str) -> Result<CutoffPreset, String> {
    CutoffPreset::parse(raw)
        .ok_or_else(|| format!("unknown cutoff table '{raw}' (expected unified or dashboard)"))
}
