use ciede2000::{Lab, Weights, DEFAULT_MAX_MISMATCHES, DEFAULT_TOLERANCE};
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use strum_macros::Display;

pub const DEFAULT_OUTPUT: &str = "values-rs.txt";

#[derive(Debug, Parser)]
#[command(
    name = "ciede2000",
    version,
    about = "CIEDE2000 color difference and cross-implementation conformance checks",
    help_template = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading}
  {usage}

{all-args}{after-help}
",
    override_usage = "ciede2000 \x1b[3m\x1b[38;5;65m[COMMAND] [OPTIONS] [FLAGS]\x1b[0m",
    disable_help_flag = true,
    disable_version_flag = true,
    styles(crate::style::clap_styles()),
    rename_all_env = "screaming-snake",
    subcommand_help_heading = "COMMANDS"
)]
pub struct Cli {
    #[arg(
        short,
        long,
        action = ArgAction::Help,
        global = true,
        help = "Prints help information",
        help_heading = "FLAGS"
    )]
    pub help: Option<bool>,

    #[arg(
        short = 'V',
        long,
        action = ArgAction::Version,
        help = "Prints version information",
        help_heading = "FLAGS"
    )]
    pub version: Option<bool>,

    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increases logging verbosity (repeatable)",
        help_heading = "FLAGS"
    )]
    pub verbose: u8,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute ΔE00 between two L*a*b* colors
    #[command(
        override_usage = "ciede2000 compute \x1b[3m\x1b[38;5;65m<L1,a1,b1> <L2,a2,b2> [OPTIONS]\x1b[0m"
    )]
    Compute(ComputeArgs),

    /// Write random test vectors with their ΔE00
    #[command(override_usage = "ciede2000 generate \x1b[3m\x1b[38;5;65m<COUNT> [OPTIONS]\x1b[0m")]
    Generate(GenerateArgs),

    /// Recompute every test vector of a file and report disagreements
    #[command(override_usage = "ciede2000 compare \x1b[3m\x1b[38;5;65m<PATH> [OPTIONS]\x1b[0m")]
    Compare(CompareArgs),

    /// Check the built-in reference samples
    #[command(override_usage = "ciede2000 samples")]
    Samples,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct WeightArgs {
    /// Lightness weight k_L
    #[arg(
        long = "kl",
        value_name = "WEIGHT",
        default_value_t = 1.0,
        help_heading = "WEIGHT OPTIONS"
    )]
    pub lightness: f64,

    /// Chroma weight k_C
    #[arg(
        long = "kc",
        value_name = "WEIGHT",
        default_value_t = 1.0,
        help_heading = "WEIGHT OPTIONS"
    )]
    pub chroma: f64,

    /// Hue weight k_H
    #[arg(
        long = "kh",
        value_name = "WEIGHT",
        default_value_t = 1.0,
        help_heading = "WEIGHT OPTIONS"
    )]
    pub hue: f64,
}

impl From<WeightArgs> for Weights {
    fn from(args: WeightArgs) -> Self {
        Weights::builder()
            .lightness(args.lightness)
            .chroma(args.chroma)
            .hue(args.hue)
            .build()
    }
}

#[derive(Args, Debug)]
pub struct ComputeArgs {
    #[arg(
        value_name = "L1,a1,b1",
        value_parser = parse_lab,
        help = "Reference color as comma-separated L*,a*,b*",
        help_heading = "REQUIRED OPTIONS"
    )]
    pub reference: Lab,

    #[arg(
        value_name = "L2,a2,b2",
        value_parser = parse_lab,
        help = "Sample color as comma-separated L*,a*,b*",
        help_heading = "REQUIRED OPTIONS"
    )]
    pub sample: Lab,

    #[command(flatten)]
    pub weights: WeightArgs,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Number of test vectors to write
    #[arg(value_name = "COUNT", required = true, help_heading = "REQUIRED OPTIONS")]
    pub count: usize,

    /// Output file
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Seed for a reproducible file
    #[arg(short, long, value_name = "SEED")]
    pub seed: Option<u64>,
}

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// File of L1,a1,b1,L2,a2,b2,deltaE records
    #[arg(value_name = "PATH", required = true, help_heading = "REQUIRED OPTIONS")]
    pub path: PathBuf,

    /// Largest accepted absolute difference
    #[arg(
        short,
        long,
        value_name = "TOLERANCE",
        default_value_t = DEFAULT_TOLERANCE,
        help_heading = "MISC OPTIONS"
    )]
    pub tolerance: f64,

    /// Stop after this many mismatches (0 checks the whole file)
    #[arg(
        short,
        long,
        value_name = "COUNT",
        default_value_t = DEFAULT_MAX_MISMATCHES,
        help_heading = "MISC OPTIONS"
    )]
    pub max_mismatches: usize,

    /// Report format
    #[arg(
        short,
        long,
        value_enum,
        value_name = "FORMAT",
        default_value = "text",
        help_heading = "MISC OPTIONS"
    )]
    pub format: OutputFormat,

    #[command(flatten)]
    pub weights: WeightArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Display)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

// Parsers

fn parse_lab(s: &str) -> Result<Lab, String> {
    let vals: Vec<_> = s.split(',').map(|v| v.trim().parse::<f64>()).collect();
    if vals.len() != 3 {
        return Err("Expected three comma-separated numbers L,a,b".to_string());
    }
    let mut arr = [0.0_f64; 3];
    for (i, v) in vals.into_iter().enumerate() {
        arr[i] = v.map_err(|e| format!("Invalid number: {e}"))?;
    }
    let lab = Lab::from(arr);
    if !lab.is_finite() {
        return Err("Color components must be finite".to_string());
    }
    Ok(lab)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lab_triples() {
        assert_eq!(
            parse_lab("50,-2.5, 79.7751").unwrap(),
            Lab::new(50.0, -2.5, 79.7751)
        );
        assert!(parse_lab("50,0").is_err());
        assert!(parse_lab("50,0,x").is_err());
        assert!(parse_lab("50,0,inf").is_err());
    }

    #[test]
    fn compute_parses_colors_and_weights() {
        let cli = Cli::try_parse_from([
            "ciede2000",
            "compute",
            "2.0,109.6,51.9861",
            "118.2,-54.71,51.8",
            "--kh",
            "2",
        ])
        .unwrap();
        match cli.command {
            Commands::Compute(args) => {
                assert_eq!(args.sample, Lab::new(118.2, -54.71, 51.8));
                assert_eq!(Weights::from(args.weights).hue, 2.0);
            }
            other => panic!("expected compute, got {other:?}"),
        }
    }

    #[test]
    fn compare_defaults() {
        let cli = Cli::try_parse_from(["ciede2000", "compare", "values-c.txt"]).unwrap();
        match cli.command {
            Commands::Compare(args) => {
                assert_eq!(args.tolerance, DEFAULT_TOLERANCE);
                assert_eq!(args.max_mismatches, DEFAULT_MAX_MISMATCHES);
                assert_eq!(args.format, OutputFormat::Text);
                assert_eq!(Weights::from(args.weights), Weights::default());
            }
            other => panic!("expected compare, got {other:?}"),
        }
    }

    #[test]
    fn generate_defaults_to_rust_values_file() {
        let cli = Cli::try_parse_from(["ciede2000", "-v", "generate", "100"]).unwrap();
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.count, 100);
                assert_eq!(args.output, PathBuf::from(DEFAULT_OUTPUT));
                assert_eq!(args.seed, None);
            }
            other => panic!("expected generate, got {other:?}"),
        }
    }
}
