use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::quant::{KineticConstants, TimingParams};

fn default_m0_scale() -> f64 {
    1.0
}

/// Everything one quantification run needs: the three input volumes, the
/// scan timing, the M0 calibration scale, and where to put the result.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// ASL difference-signal volume.
    pub asl: PathBuf,
    /// Equilibrium-magnetization (M0) reference volume.
    pub m0: PathBuf,
    /// Brain mask volume (binary 0/1).
    pub mask: PathBuf,
    /// Labeling duration and post-labeling delay, in seconds.
    pub timing: TimingParams,
    /// Scale applied to M0 before calibration.
    #[serde(default = "default_m0_scale")]
    pub m0_scale: f64,
    /// Directory the perfusion map is written into.
    pub output_dir: PathBuf,
    /// Kinetic-model constants; the defaults fit a background-suppressed
    /// pCASL acquisition at 3T.
    #[serde(default)]
    pub constants: KineticConstants,
}
