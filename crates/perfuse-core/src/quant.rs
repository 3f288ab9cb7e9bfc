//! Single-compartment kinetic-model inversion.
//!
//! Converts the raw ASL difference signal into absolute perfusion in
//! mL/100g/min, calibrated against the equilibrium magnetization (M0)
//! reference:
//!
//! ```text
//! CBF = (dM / (M0 * scale)) * (6000 * lambda * exp(PLD / T1b))
//!       / (2 * alpha * T1b * (1 - exp(-LD / T1b)))
//! ```
//!
//! The inversion is purely elementwise; voxels where the division is
//! degenerate (zero calibrated M0, or LD = 0 collapsing the denominator)
//! produce non-finite values here and are zeroed by the stabilizer stage.

use ndarray::ArrayD;
use serde::{Deserialize, Serialize};

use crate::consts::{BLOOD_T1, LABELING_EFFICIENCY, PARTITION_COEFFICIENT, PERFUSION_UNIT_SCALE};
use crate::error::{PerfuseError, Result};

/// Scan timing of the labeling experiment, in seconds.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TimingParams {
    /// Labeling duration (LD).
    pub labeling_duration: f64,
    /// Post-labeling delay (PLD).
    pub post_labeling_delay: f64,
}

impl TimingParams {
    /// Reject timings the model cannot interpret.
    ///
    /// Zero is allowed: LD = 0 collapses the kinetic denominator, and the
    /// stabilizer recovers the resulting voxels downstream.
    pub fn validate(&self) -> Result<()> {
        screen_param("labeling duration", self.labeling_duration)?;
        screen_param("post-labeling delay", self.post_labeling_delay)?;
        Ok(())
    }
}

/// Physiological constants of the kinetic model.
///
/// Passed into the engine as a value so alternative constants can be
/// used in tests without touching global state.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct KineticConstants {
    /// Labeling efficiency alpha (dimensionless).
    pub labeling_efficiency: f64,
    /// Blood-brain partition coefficient lambda, in mL/g.
    pub partition_coefficient: f64,
    /// Arterial blood T1, in seconds.
    pub blood_t1: f64,
}

impl Default for KineticConstants {
    fn default() -> Self {
        Self {
            labeling_efficiency: LABELING_EFFICIENCY,
            partition_coefficient: PARTITION_COEFFICIENT,
            blood_t1: BLOOD_T1,
        }
    }
}

impl KineticConstants {
    /// The scalar factor multiplying `dM / (M0 * scale)` at every voxel.
    ///
    /// Infinite when LD = 0; the per-voxel results are then zeroed by the
    /// stabilizer.
    pub fn calibration_factor(&self, timing: &TimingParams) -> f64 {
        let numerator = PERFUSION_UNIT_SCALE
            * self.partition_coefficient
            * (timing.post_labeling_delay / self.blood_t1).exp();
        let denominator = 2.0
            * self.labeling_efficiency
            * self.blood_t1
            * (1.0 - (-timing.labeling_duration / self.blood_t1).exp());
        numerator / denominator
    }
}

/// Invert the kinetic model over every voxel.
///
/// `asl` and `m0` must share one grid (the caller validates shapes before
/// arithmetic). The output has the same shape; no mask is applied and
/// degenerate voxels are left as NaN/Inf for the stabilizer.
pub fn quantify(
    asl: &ArrayD<f64>,
    m0: &ArrayD<f64>,
    timing: &TimingParams,
    m0_scale: f64,
    constants: &KineticConstants,
) -> Result<ArrayD<f64>> {
    timing.validate()?;
    screen_param("M0 scale", m0_scale)?;

    let factor = constants.calibration_factor(timing);
    let m0_cal = m0.mapv(|v| v * m0_scale);

    Ok((asl / &m0_cal) * factor)
}

fn screen_param(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(PerfuseError::InvalidParameter(format!(
            "{name} must be a finite non-negative number, got {value}"
        )));
    }
    Ok(())
}
