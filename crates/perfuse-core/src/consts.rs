/// Labeling efficiency of the pCASL sequence with background suppression
/// (dimensionless).
pub const LABELING_EFFICIENCY: f64 = 0.6375;

/// Blood-brain partition coefficient, in mL/g.
pub const PARTITION_COEFFICIENT: f64 = 0.9;

/// Longitudinal relaxation time of arterial blood at 3T, in seconds.
pub const BLOOD_T1: f64 = 1.6;

/// Converts the per-second, per-gram kinetic model into mL/100g/min
/// (100 g x 60 s/min).
pub const PERFUSION_UNIT_SCALE: f64 = 6000.0;

/// Filename of the calibrated perfusion map inside the output directory.
pub const CBF_FILENAME: &str = "cbf.nii.gz";
