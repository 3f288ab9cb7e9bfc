use std::path::Path;

use ndarray::ArrayD;
use nifti::volume::ndarray::IntoNdArray;
use nifti::writer::WriterOptions;
use nifti::{NiftiHeader, NiftiObject, ReaderOptions};

use crate::error::{PerfuseError, Result};
use crate::volume::{Volume, VolumeInfo};

/// Load a volumetric image from a `.nii` or `.nii.gz` file.
///
/// Samples are cast to `f64` with the header's slope/intercept scaling
/// applied. The header is kept alongside the data so the spatial reference
/// survives the pipeline.
pub fn load_volume(path: &Path) -> Result<Volume> {
    let object = ReaderOptions::new()
        .read_file(path)
        .map_err(|source| PerfuseError::VolumeRead {
            path: path.to_path_buf(),
            source,
        })?;

    let header = object.header().clone();
    let data: ArrayD<f64> =
        object
            .into_volume()
            .into_ndarray()
            .map_err(|source| PerfuseError::VolumeRead {
                path: path.to_path_buf(),
                source,
            })?;

    Ok(Volume::new(data, header))
}

/// Write a sample array as a NIfTI file, inheriting the spatial reference
/// (affine and remaining header fields) from `reference`.
///
/// Gzip compression is chosen by the path extension (`.nii.gz` vs `.nii`).
pub fn save_volume(data: &ArrayD<f64>, reference: &NiftiHeader, path: &Path) -> Result<()> {
    WriterOptions::new(path)
        .reference_header(reference)
        .write_nifti(data)
        .map_err(|source| PerfuseError::VolumeWrite {
            path: path.to_path_buf(),
            source,
        })
}

/// Read header facts without materializing the sample data.
pub fn read_info(path: &Path) -> Result<VolumeInfo> {
    let header = NiftiHeader::from_file(path).map_err(|source| PerfuseError::VolumeRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(VolumeInfo::from_header(&header))
}
