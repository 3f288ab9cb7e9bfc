use ndarray::ArrayD;

use crate::error::Result;
use crate::validate::check_same_shape;

/// Restrict a perfusion map to the brain: elementwise product with the
/// mask volume.
///
/// Precondition: mask values are binary (0 or 1). The product semantics
/// mean any other value scales the perfusion estimate proportionally
/// instead of acting as an inclusion filter, so fractional (e.g.
/// probabilistic) masks must be thresholded upstream.
pub fn apply_mask(cbf: &ArrayD<f64>, mask: &ArrayD<f64>) -> Result<ArrayD<f64>> {
    check_same_shape("CBF", cbf, "mask", mask)?;
    Ok(cbf * mask)
}
