use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use perfuse_core::pipeline::config::PipelineConfig;
use perfuse_core::pipeline::{run_pipeline_reported, PipelineStage, ProgressReporter};
use perfuse_core::quant::{KineticConstants, TimingParams};

#[derive(Args)]
pub struct QuantifyArgs {
    /// ASL difference-signal volume (.nii or .nii.gz)
    #[arg(long)]
    pub asl: Option<PathBuf>,

    /// M0 reference volume
    #[arg(long)]
    pub m0: Option<PathBuf>,

    /// Brain mask volume (binary 0/1)
    #[arg(short, long)]
    pub mask: Option<PathBuf>,

    /// Labeling duration in seconds
    #[arg(long)]
    pub ld: Option<f64>,

    /// Post-labeling delay in seconds
    #[arg(long)]
    pub pld: Option<f64>,

    /// Calibration scale applied to M0
    #[arg(long)]
    pub scale: Option<f64>,

    /// Output directory; the map is written as cbf.nii.gz inside it
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Pipeline config file (TOML); replaces the individual flags
    #[arg(long)]
    pub config: Option<PathBuf>,
}

struct BarReporter {
    bar: ProgressBar,
}

impl ProgressReporter for BarReporter {
    fn begin_stage(&self, stage: PipelineStage) {
        self.bar.set_message(stage.to_string());
    }

    fn finish_stage(&self) {
        self.bar.inc(1);
    }
}

pub fn run(args: &QuantifyArgs) -> Result<()> {
    let config = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid pipeline config")?
    } else {
        build_config_from_args(args)?
    };

    crate::summary::print_quantify_summary(&config);

    let bar = ProgressBar::new(PipelineStage::ALL.len() as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{msg:26} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );

    let reporter = Arc::new(BarReporter { bar: bar.clone() });
    let output = run_pipeline_reported(&config, reporter)?;

    bar.finish_with_message("Done");
    println!("\nOutput saved to {}", output.path.display());

    Ok(())
}

fn missing(name: &'static str) -> String {
    format!("Missing required argument --{name} (or --config)")
}

fn build_config_from_args(args: &QuantifyArgs) -> Result<PipelineConfig> {
    // Without --config, every acquisition parameter must come from a flag.
    Ok(PipelineConfig {
        asl: args.asl.clone().with_context(|| missing("asl"))?,
        m0: args.m0.clone().with_context(|| missing("m0"))?,
        mask: args.mask.clone().with_context(|| missing("mask"))?,
        timing: TimingParams {
            labeling_duration: args.ld.with_context(|| missing("ld"))?,
            post_labeling_delay: args.pld.with_context(|| missing("pld"))?,
        },
        m0_scale: args.scale.with_context(|| missing("scale"))?,
        output_dir: args.out.clone().with_context(|| missing("out"))?,
        constants: KineticConstants::default(),
    })
}
