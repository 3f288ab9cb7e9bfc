use ndarray::ArrayD;

/// Replace every non-finite sample with exact zero.
///
/// Degenerate voxels (zero calibrated M0, or a zero labeling duration)
/// come out of the kinetic inversion as NaN or +/-Inf. They carry no
/// physiological information and would poison any downstream mean or sum,
/// so they are zeroed rather than surfaced as errors.
pub fn zero_nonfinite(cbf: &ArrayD<f64>) -> ArrayD<f64> {
    cbf.mapv(|v| if v.is_finite() { v } else { 0.0 })
}
