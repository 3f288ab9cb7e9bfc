//! perfuse-core: ASL cerebral-blood-flow quantification
//!
//! Turns a raw arterial-spin-labeling difference signal, an M0 reference,
//! and a brain mask into a calibrated perfusion map in mL/100g/min via a
//! single-compartment kinetic-model inversion.
//!
//! # Modules
//! - `quant`: the kinetic-model engine
//! - `stabilize`: degenerate-voxel (NaN/Inf) recovery
//! - `mask`: brain-mask application
//! - `validate`: grid-shape checks
//! - `io`: NIfTI volume read/write
//! - `pipeline`: the end-to-end run

pub mod consts;
pub mod error;
pub mod volume;

pub mod io;
pub mod mask;
pub mod quant;
pub mod stabilize;
pub mod validate;

pub mod pipeline;
