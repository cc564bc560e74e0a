use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use laplace_core::pipeline::config::CodecConfig;
use laplace_core::pipeline::run_pipeline_reported;
use tracing::debug;

use super::args::PyramidArgs;
use crate::progress::BarReporter;

#[derive(Args)]
pub struct EncodeArgs {
    /// Input image file (PNG, TIFF, ...)
    pub file: PathBuf,

    /// Codec config file (TOML); its pyramid settings replace the pyramid
    /// flags, while --output, --difference and --color override the file
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub pyramid: PyramidArgs,

    /// Encode the R, G and B channels as separate pyramids
    #[arg(long)]
    pub color: bool,

    /// Also write the original - decoded difference image
    #[arg(long)]
    pub difference: Option<PathBuf>,

    /// Output file path for the decoded image [default: decoded.png]
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &EncodeArgs) -> Result<()> {
    let config = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        let config: CodecConfig = toml::from_str(&contents).context("Invalid codec config")?;
        apply_overrides(config, args)
    } else {
        build_config_from_args(args)
    };

    debug!(config = ?config, "Resolved codec config");
    crate::summary::print_codec_summary(&config);

    let reporter = Arc::new(BarReporter::new()?);
    let output = run_pipeline_reported(&config, reporter.clone())
        .with_context(|| format!("Failed to encode {}", config.input.display()))?;
    reporter.finish();

    crate::summary::print_output_summary(&output);
    println!("Decoded image saved to {}", config.output.display());
    if let Some(ref path) = config.difference {
        println!("Difference image saved to {}", path.display());
    }

    Ok(())
}

fn build_config_from_args(args: &EncodeArgs) -> CodecConfig {
    CodecConfig {
        input: args.file.clone(),
        output: args
            .output
            .clone()
            .unwrap_or_else(|| CodecConfig::default().output),
        difference: args.difference.clone(),
        color: args.color,
        pyramid: args.pyramid.to_params(),
    }
}

/// Apply the explicitly given file-level flags on top of a loaded config.
fn apply_overrides(mut config: CodecConfig, args: &EncodeArgs) -> CodecConfig {
    config.input = args.file.clone();
    if let Some(ref output) = args.output {
        config.output = output.clone();
    }
    if args.difference.is_some() {
        config.difference = args.difference.clone();
    }
    if args.color {
        config.color = true;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use laplace_core::pyramid::PyramidParams;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        encode: EncodeArgs,
    }

    fn parse(argv: &[&str]) -> EncodeArgs {
        TestCli::try_parse_from(argv).unwrap().encode
    }

    fn loaded() -> CodecConfig {
        CodecConfig {
            input: PathBuf::from("from_file.png"),
            output: PathBuf::from("file_out.tiff"),
            difference: Some(PathBuf::from("file_diff.png")),
            color: false,
            pyramid: PyramidParams::new(3, 0.0),
        }
    }

    #[test]
    fn test_flags_override_loaded_config() {
        let args = parse(&[
            "encode", "in.png", "-o", "cli_out.png", "--difference", "cli_diff.png", "--color",
        ]);
        let config = apply_overrides(loaded(), &args);
        assert_eq!(config.input, PathBuf::from("in.png"));
        assert_eq!(config.output, PathBuf::from("cli_out.png"));
        assert_eq!(config.difference, Some(PathBuf::from("cli_diff.png")));
        assert!(config.color);
        assert_eq!(config.pyramid, PyramidParams::new(3, 0.0));
    }

    #[test]
    fn test_absent_flags_keep_loaded_config() {
        let args = parse(&["encode", "in.png"]);
        let config = apply_overrides(loaded(), &args);
        assert_eq!(config.output, PathBuf::from("file_out.tiff"));
        assert_eq!(config.difference, Some(PathBuf::from("file_diff.png")));
        assert!(!config.color);
    }

    #[test]
    fn test_output_defaults_without_config() {
        let config = build_config_from_args(&parse(&["encode", "in.png"]));
        assert_eq!(config.output, PathBuf::from("decoded.png"));
    }
}
