use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use perfuse_core::pipeline::config::PipelineConfig;
use perfuse_core::quant::{KineticConstants, TimingParams};

#[derive(Args)]
pub struct ConfigArgs {
    /// Write config to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print or save a full default PipelineConfig as TOML.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let config = PipelineConfig {
        asl: PathBuf::from("asl.nii.gz"),
        m0: PathBuf::from("m0.nii.gz"),
        mask: PathBuf::from("mask.nii.gz"),
        timing: TimingParams {
            labeling_duration: 1.8,
            post_labeling_delay: 2.0,
        },
        m0_scale: 1.0,
        output_dir: PathBuf::from("out"),
        constants: KineticConstants::default(),
    };
    let toml_str = toml::to_string_pretty(&config)?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        println!("Default config saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}
