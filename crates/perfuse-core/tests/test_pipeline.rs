mod common;

use approx::assert_relative_eq;
use ndarray::{ArrayD, IxDyn};

use perfuse_core::error::PerfuseError;
use perfuse_core::io::nifti_io::load_volume;
use perfuse_core::pipeline::run_pipeline;
use perfuse_core::quant::TimingParams;

const TIMING: TimingParams = TimingParams {
    labeling_duration: 1.8,
    post_labeling_delay: 2.0,
};

#[test]
fn end_to_end_closed_form() {
    let (_dir, config) = common::const_fixture(&[4, 4, 4], 1.0, 100.0, 1.0, TIMING, 1.0);

    let output = run_pipeline(&config).unwrap();
    assert!(output.path.exists());
    assert!(output.path.ends_with("cbf.nii.gz"));

    let expected = common::closed_form_cbf(1.0, 100.0, 1.0, 1.8, 2.0);
    let written = load_volume(&output.path).unwrap();
    assert_eq!(written.shape(), &[4, 4, 4]);
    for &v in written.data.iter() {
        assert_relative_eq!(v, expected, max_relative = 1e-9);
    }
}

#[test]
fn masked_out_region_is_zero() {
    let (_dir, config) = common::const_fixture(&[2, 2, 2], 1.0, 100.0, 1.0, TIMING, 1.0);

    // Overwrite the mask: half in, half out.
    let mask = ArrayD::from_shape_vec(
        IxDyn(&[2, 2, 2]),
        vec![1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0],
    )
    .unwrap();
    common::write_volume(&config.mask, mask);

    let output = run_pipeline(&config).unwrap();
    let expected = common::closed_form_cbf(1.0, 100.0, 1.0, 1.8, 2.0);

    let cbf = &output.cbf.data;
    for i in 0..2 {
        for j in 0..2 {
            assert_relative_eq!(cbf[[0, i, j]], expected, max_relative = 1e-9);
            assert_eq!(cbf[[1, i, j]], 0.0);
        }
    }
}

#[test]
fn degenerate_m0_voxel_is_zeroed() {
    let (_dir, config) = common::const_fixture(&[2, 2, 2], 1.0, 100.0, 1.0, TIMING, 1.0);

    // One zero voxel in M0 forces a division by zero there.
    let mut m0 = ArrayD::from_elem(IxDyn(&[2, 2, 2]), 100.0);
    m0[[0, 0, 0]] = 0.0;
    common::write_volume(&config.m0, m0);

    let output = run_pipeline(&config).unwrap();
    let cbf = &output.cbf.data;

    assert_eq!(cbf[[0, 0, 0]], 0.0);
    let expected = common::closed_form_cbf(1.0, 100.0, 1.0, 1.8, 2.0);
    assert_relative_eq!(cbf[[1, 1, 1]], expected, max_relative = 1e-9);
    assert!(cbf.iter().all(|v| v.is_finite()));
}

#[test]
fn zero_labeling_duration_yields_all_zeros() {
    let timing = TimingParams {
        labeling_duration: 0.0,
        post_labeling_delay: 2.0,
    };
    let (_dir, config) = common::const_fixture(&[3, 3, 3], 1.0, 100.0, 1.0, timing, 1.0);

    let output = run_pipeline(&config).unwrap();
    assert!(output.cbf.data.iter().all(|&v| v == 0.0));
}

#[test]
fn zero_scale_yields_all_zeros() {
    let (_dir, config) = common::const_fixture(&[2, 2, 2], 1.0, 100.0, 1.0, TIMING, 0.0);

    let output = run_pipeline(&config).unwrap();
    assert!(output.cbf.data.iter().all(|&v| v == 0.0));
}

#[test]
fn shape_mismatch_aborts_without_output() {
    let (_dir, config) = common::const_fixture(&[2, 2, 2], 1.0, 100.0, 1.0, TIMING, 1.0);

    // Rewrite the mask on a different grid.
    common::write_volume(&config.mask, ArrayD::from_elem(IxDyn(&[2, 2, 1]), 1.0));

    let err = run_pipeline(&config).unwrap_err();
    assert!(matches!(err, PerfuseError::ShapeMismatch { .. }));
    assert!(!config.output_dir.join("cbf.nii.gz").exists());
}

#[test]
fn missing_input_aborts_without_output() {
    let (_dir, mut config) = common::const_fixture(&[2, 2, 2], 1.0, 100.0, 1.0, TIMING, 1.0);
    config.asl = config.output_dir.join("no_such_asl.nii.gz");

    let err = run_pipeline(&config).unwrap_err();
    assert!(matches!(err, PerfuseError::VolumeRead { .. }));
    assert!(!config.output_dir.join("cbf.nii.gz").exists());
}

#[test]
fn repeated_runs_are_identical() {
    let (_dir, config) = common::const_fixture(&[3, 3, 3], 1.5, 80.0, 1.0, TIMING, 2.0);

    let first = run_pipeline(&config).unwrap();
    let second = run_pipeline(&config).unwrap();

    assert_eq!(first.cbf.data, second.cbf.data);

    let reread = load_volume(&second.path).unwrap();
    assert_eq!(reread.data, first.cbf.data);
}

#[test]
fn output_inherits_asl_spatial_reference() {
    let (_dir, config) = common::const_fixture(&[2, 3, 4], 1.0, 100.0, 1.0, TIMING, 1.0);

    let asl = load_volume(&config.asl).unwrap();
    let output = run_pipeline(&config).unwrap();
    let written = load_volume(&output.path).unwrap();

    assert_eq!(written.header.srow_x, asl.header.srow_x);
    assert_eq!(written.header.srow_y, asl.header.srow_y);
    assert_eq!(written.header.srow_z, asl.header.srow_z);
    assert_eq!(written.header.pixdim, asl.header.pixdim);
}
