use ndarray::ArrayD;

use crate::error::{PerfuseError, Result};

/// Check that two grids agree, naming both in the error.
pub fn check_same_shape(
    left_name: &'static str,
    left: &ArrayD<f64>,
    right_name: &'static str,
    right: &ArrayD<f64>,
) -> Result<()> {
    if left.shape() != right.shape() {
        return Err(PerfuseError::ShapeMismatch {
            left_name,
            left: left.shape().to_vec(),
            right_name,
            right: right.shape().to_vec(),
        });
    }
    Ok(())
}

/// Check that the ASL, M0, and mask grids all agree.
///
/// Runs before any arithmetic; a mismatch here means the inputs were not
/// produced on the same acquisition grid and no elementwise result would
/// be meaningful.
pub fn check_shapes(asl: &ArrayD<f64>, m0: &ArrayD<f64>, mask: &ArrayD<f64>) -> Result<()> {
    check_same_shape("ASL", asl, "M0", m0)?;
    check_same_shape("ASL", asl, "mask", mask)?;
    Ok(())
}
