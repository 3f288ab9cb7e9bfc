use std::path::PathBuf;

use crate::volume::Volume;

/// Pipeline processing stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Loading,
    Validating,
    Quantifying,
    Stabilizing,
    Masking,
    Writing,
}

impl PipelineStage {
    /// The stages in execution order. Each runs exactly once per run.
    pub const ALL: [PipelineStage; 6] = [
        Self::Loading,
        Self::Validating,
        Self::Quantifying,
        Self::Stabilizing,
        Self::Masking,
        Self::Writing,
    ];
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loading => write!(f, "Loading volumes"),
            Self::Validating => write!(f, "Validating shapes"),
            Self::Quantifying => write!(f, "Quantifying perfusion"),
            Self::Stabilizing => write!(f, "Zeroing degenerate voxels"),
            Self::Masking => write!(f, "Applying brain mask"),
            Self::Writing => write!(f, "Writing output"),
        }
    }
}

/// Result of a quantification run.
#[derive(Clone, Debug)]
pub struct QuantOutput {
    /// The calibrated perfusion map, on the ASL volume's grid, in
    /// mL/100g/min.
    pub cbf: Volume,
    /// Where the map was written.
    pub path: PathBuf,
}

/// Progress reporting for the pipeline.
///
/// Implementors can use this to drive progress bars, logging, or any other
/// UI feedback. All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// A new pipeline stage has started.
    fn begin_stage(&self, _stage: PipelineStage) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

/// No-op progress reporter, used when `run_pipeline` delegates.
pub(super) struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
