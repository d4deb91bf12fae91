use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use super::args::{Cli, Commands, CompareArgs, ComputeArgs, GenerateArgs, OutputFormat};
use crate::style;
use ciede2000::{
    compare_reader, delta_e,
    error::Result,
    generate::{validate_count, Generator},
    vectors::write_samples,
    within_tolerance, Config, Lab, Report, Weights, DEFAULT_TOLERANCE, REFERENCE_SAMPLES,
};
use indicatif::{MultiProgress, ProgressBar};
use log::{debug, error, info};
use tabled::{settings::Style, Table, Tabled};

const PROGRESS_BAR_WIDTH: usize = 40;

/// Runs one subcommand. `Ok(false)` means the run finished but found
/// disagreements.
pub fn run_cli(cli: Cli, progress: &MultiProgress) -> Result<bool> {
    match cli.command {
        Commands::Compute(args) => compute(&args),
        Commands::Generate(args) => generate(&args, progress),
        Commands::Compare(args) => compare(&args),
        Commands::Samples => samples(),
    }
}

fn compute(args: &ComputeArgs) -> Result<bool> {
    let weights = Weights::validated(args.weights.into())?;
    debug!("Using weights: {:?}", weights);

    let value = delta_e(&args.reference, &args.sample, &weights);
    let s = style::theme();
    info!(
        "{} vs {}\n ΔE00 = {}",
        s.primary.apply_to(args.reference),
        s.secondary.apply_to(args.sample),
        s.highlight.apply_to(value),
    );
    Ok(true)
}

fn generate(args: &GenerateArgs, progress: &MultiProgress) -> Result<bool> {
    let count = validate_count(args.count)?;
    let start = Instant::now();
    let s = style::theme();

    let generator = match args.seed {
        Some(seed) => Generator::seeded(seed),
        None => Generator::from_entropy(),
    };

    info!(
        "Generating {} samples → {}",
        s.highlight.apply_to(count),
        s.secondary.apply_to(args.output.display())
    );

    let pb = progress.add(ProgressBar::new(count as u64));
    pb.set_style(style::create_generate_progress_style(PROGRESS_BAR_WIDTH));

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let writer = BufWriter::new(File::create(&args.output)?);
    let samples = generator.take(count).inspect(|_| pb.inc(1));
    let written = write_samples(writer, samples)?;
    pb.finish_and_clear();
    progress.remove(&pb);

    info!(
        "Wrote {} samples in {}",
        s.highlight.apply_to(written),
        s.secondary.apply_to(format_duration(start.elapsed()))
    );
    Ok(true)
}

fn compare(args: &CompareArgs) -> Result<bool> {
    let config = Config::validated(
        Config::builder()
            .weights(args.weights.into())
            .tolerance(args.tolerance)
            .max_mismatches(args.max_mismatches)
            .build(),
    )?;
    debug!("Using config: {}", config);

    let start = Instant::now();
    let reader = BufReader::new(File::open(&args.path)?);
    let report = compare_reader(reader, &config)?;
    let elapsed = start.elapsed();

    match args.format {
        OutputFormat::Json => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", report.to_json()?)?;
        }
        OutputFormat::Text => print_report(&args.path, &report, elapsed),
    }

    Ok(report.is_success())
}

fn print_report(path: &Path, report: &Report, elapsed: Duration) {
    let s = style::theme();

    if !report.mismatches.is_empty() {
        let mut table = Table::new(&report.mismatches);
        table.with(Style::modern_rounded());
        error!("Mismatches\n{}", table);
    }
    if report.truncated {
        error!(
            "Stopped after {} mismatches, the rest of the file was not checked",
            report.mismatches.len()
        );
    }
    if let Some(worst) = report.worst() {
        error!(
            "Largest difference {:e} at line {}",
            worst.difference(),
            worst.line
        );
    }

    let verdict = if report.is_success() {
        s.success.apply_to("conforms")
    } else {
        s.error.apply_to("does not conform")
    };
    info!(
        "{} {} ({} checked, {} mismatched, {} malformed) in {}",
        s.primary.apply_to(path.display()),
        verdict,
        s.highlight.apply_to(report.checked),
        report.mismatches.len(),
        report.malformed.len(),
        s.secondary.apply_to(format_duration(elapsed)),
    );
}

#[derive(Tabled)]
struct SampleRow {
    #[tabled(rename = "#")]
    index: usize,
    reference: Lab,
    sample: Lab,
    expected: f64,
    computed: f64,
    status: String,
}

fn samples() -> Result<bool> {
    let rows: Vec<SampleRow> = REFERENCE_SAMPLES
        .iter()
        .enumerate()
        .map(|(i, sample)| {
            let computed = sample.reference.delta_e(&sample.sample);
            SampleRow {
                index: i + 1,
                reference: sample.reference,
                sample: sample.sample,
                expected: sample.delta_e,
                computed,
                status: style::status(within_tolerance(
                    sample.delta_e,
                    computed,
                    DEFAULT_TOLERANCE,
                )),
            }
        })
        .collect();

    let failed = rows
        .iter()
        .filter(|row| !within_tolerance(row.expected, row.computed, DEFAULT_TOLERANCE))
        .count();

    let mut table = Table::new(&rows);
    table.with(Style::modern_rounded());
    let s = style::theme();
    info!(
        "Reference samples ({})\n{}",
        s.highlight.apply_to(rows.len()),
        table
    );

    if failed > 0 {
        error!("{} of {} reference samples disagree", failed, rows.len());
    }
    Ok(failed == 0)
}

pub fn format_duration(duration: Duration) -> String {
    let millis = duration.as_millis();
    let secs = duration.as_secs() as f64 + (duration.subsec_nanos() as f64 / 1_000_000_000.0);

    if duration.as_secs() == 0 && millis > 0 {
        format!("{}ms", millis)
    } else {
        format!("{:.3}s", secs)
    }
}
