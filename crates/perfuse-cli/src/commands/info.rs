use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use perfuse_core::io::nifti_io::read_info;

#[derive(Args)]
pub struct InfoArgs {
    /// Input NIfTI file (.nii or .nii.gz)
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let info = read_info(&args.file)?;

    let dims = info
        .dims
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join("x");
    let voxels = info
        .voxel_size
        .iter()
        .map(|v| format!("{v:.2}"))
        .collect::<Vec<_>>()
        .join(" x ");

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}", dims);
    println!("Voxel size:  {} mm", voxels);
    println!("Datatype:    {}", info.datatype);
    println!(
        "Scaling:     slope {} intercept {}",
        info.scl_slope, info.scl_inter
    );
    println!(
        "Orientation: sform {} qform {}",
        info.sform_code, info.qform_code
    );
    if !info.description.is_empty() {
        println!("Description: {}", info.description);
    }

    Ok(())
}
