use std::path::Path;

use ndarray::{ArrayD, IxDyn};
use nifti::writer::WriterOptions;
use perfuse_core::pipeline::config::PipelineConfig;
use perfuse_core::quant::{KineticConstants, TimingParams};

/// Write a NIfTI volume filled with `value` at every voxel.
pub fn write_const_volume(path: &Path, shape: &[usize], value: f64) {
    write_volume(path, ArrayD::from_elem(IxDyn(shape), value));
}

/// Write a NIfTI volume with the given samples.
pub fn write_volume(path: &Path, data: ArrayD<f64>) {
    WriterOptions::new(path)
        .write_nifti(&data)
        .expect("write test volume");
}

/// Build a temp directory holding constant-valued ASL/M0/mask volumes of
/// one shape plus an empty output directory, and a config pointing at
/// them.
///
/// The directory stays alive as long as the returned `TempDir` is not
/// dropped.
pub fn const_fixture(
    shape: &[usize],
    asl: f64,
    m0: f64,
    mask: f64,
    timing: TimingParams,
    m0_scale: f64,
) -> (tempfile::TempDir, PipelineConfig) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let asl_path = dir.path().join("asl.nii.gz");
    let m0_path = dir.path().join("m0.nii.gz");
    let mask_path = dir.path().join("mask.nii.gz");
    let out_dir = dir.path().join("out");

    write_const_volume(&asl_path, shape, asl);
    write_const_volume(&m0_path, shape, m0);
    write_const_volume(&mask_path, shape, mask);
    std::fs::create_dir(&out_dir).expect("create output dir");

    let config = PipelineConfig {
        asl: asl_path,
        m0: m0_path,
        mask: mask_path,
        timing,
        m0_scale,
        output_dir: out_dir,
        constants: KineticConstants::default(),
    };

    (dir, config)
}

/// The closed-form model value for a uniform voxel, computed directly
/// from the published constants.
pub fn closed_form_cbf(asl: f64, m0: f64, scale: f64, ld: f64, pld: f64) -> f64 {
    (asl / (m0 * scale)) * (6000.0 * 0.9 * (pld / 1.6).exp())
        / (2.0 * 0.6375 * 1.6 * (1.0 - (-ld / 1.6).exp()))
}
