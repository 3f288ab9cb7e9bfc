use std::sync::Arc;

use tracing::info;

use crate::consts::CBF_FILENAME;
use crate::error::Result;
use crate::io::nifti_io::{load_volume, save_volume};
use crate::mask::apply_mask;
use crate::quant::quantify;
use crate::stabilize::zero_nonfinite;
use crate::validate::check_shapes;
use crate::volume::Volume;

use super::config::PipelineConfig;
use super::types::{NoOpReporter, PipelineStage, ProgressReporter, QuantOutput};

/// Run the quantification pipeline with a thread-safe progress reporter.
///
/// The stages run linearly, each exactly once, and any failure aborts the
/// run before anything is written. The output inherits the spatial
/// reference of the ASL volume and lands at `<output_dir>/cbf.nii.gz`.
pub fn run_pipeline_reported(
    config: &PipelineConfig,
    reporter: Arc<dyn ProgressReporter>,
) -> Result<QuantOutput> {
    config.timing.validate()?;

    reporter.begin_stage(PipelineStage::Loading);
    let asl = load_volume(&config.asl)?;
    let m0 = load_volume(&config.m0)?;
    let mask = load_volume(&config.mask)?;
    info!(
        shape = ?asl.shape(),
        ld = config.timing.labeling_duration,
        pld = config.timing.post_labeling_delay,
        scale = config.m0_scale,
        "Loaded ASL, M0, and mask volumes"
    );
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::Validating);
    check_shapes(&asl.data, &m0.data, &mask.data)?;
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::Quantifying);
    let raw = quantify(
        &asl.data,
        &m0.data,
        &config.timing,
        config.m0_scale,
        &config.constants,
    )?;
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::Stabilizing);
    let stabilized = zero_nonfinite(&raw);
    let degenerate = raw.iter().filter(|v| !v.is_finite()).count();
    if degenerate > 0 {
        info!(voxels = degenerate, "Zeroed degenerate voxels");
    }
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::Masking);
    let masked = apply_mask(&stabilized, &mask.data)?;
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::Writing);
    let path = config.output_dir.join(CBF_FILENAME);
    save_volume(&masked, &asl.header, &path)?;
    info!(path = %path.display(), "Wrote perfusion map");
    reporter.finish_stage();

    Ok(QuantOutput {
        cbf: Volume::new(masked, asl.header),
        path,
    })
}

/// Run the quantification pipeline without progress reporting.
pub fn run_pipeline(config: &PipelineConfig) -> Result<QuantOutput> {
    run_pipeline_reported(config, Arc::new(NoOpReporter))
}
