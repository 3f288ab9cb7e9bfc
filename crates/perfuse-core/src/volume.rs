use ndarray::ArrayD;
use nifti::NiftiHeader;

/// A volumetric image: samples in double precision plus the spatial
/// reference (NIfTI header, carrying the affine) of the file it came from.
#[derive(Clone, Debug)]
pub struct Volume {
    /// Sample data, indexed in the on-disk voxel order.
    pub data: ArrayD<f64>,
    /// Header of the source file; kept opaque and passed through to the
    /// writer so outputs stay aligned with their source grid.
    pub header: NiftiHeader,
}

impl Volume {
    pub fn new(data: ArrayD<f64>, header: NiftiHeader) -> Self {
        Self { data, header }
    }

    /// Grid dimensions of the volume.
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Total number of voxels.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Header facts about a volume file, for display.
#[derive(Clone, Debug)]
pub struct VolumeInfo {
    pub dims: Vec<usize>,
    pub voxel_size: Vec<f32>,
    pub datatype: i16,
    pub scl_slope: f32,
    pub scl_inter: f32,
    pub sform_code: i16,
    pub qform_code: i16,
    pub description: String,
}

impl VolumeInfo {
    pub fn from_header(header: &NiftiHeader) -> Self {
        let ndim = (header.dim[0] as usize).clamp(1, 7);
        let dims = header.dim[1..=ndim].iter().map(|&d| d as usize).collect();
        let voxel_size = header.pixdim[1..=ndim].to_vec();

        Self {
            dims,
            voxel_size,
            datatype: header.datatype,
            scl_slope: header.scl_slope,
            scl_inter: header.scl_inter,
            sform_code: header.sform_code,
            qform_code: header.qform_code,
            description: String::from_utf8_lossy(&header.descrip)
                .trim_end_matches('\0')
                .to_string(),
        }
    }
}
