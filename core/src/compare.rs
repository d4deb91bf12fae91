//! Cross-implementation conformance checks.
//!
//! A record conforms when recomputing its ΔE00 lands within the configured
//! tolerance of the recorded value and both values are finite. Malformed
//! records and mismatches are counted and logged, never fatal.

use std::io::BufRead;

use log::{debug, error, warn};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use tabled::Tabled;

use crate::config::Config;
use crate::delta_e::delta_e;
use crate::error::{Error, Result};
use crate::vectors::{read_samples, Sample};

pub fn within_tolerance(expected: f64, computed: f64, tolerance: f64) -> bool {
    expected.is_finite() && computed.is_finite() && (expected - computed).abs() <= tolerance
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "cli", derive(Tabled))]
pub struct Mismatch {
    pub line: usize,
    #[cfg_attr(feature = "cli", tabled(inline))]
    pub sample: Sample,
    pub computed: f64,
}

impl Mismatch {
    pub fn difference(&self) -> f64 {
        (self.computed - self.sample.delta_e).abs()
    }
}

/// Recomputes `sample` with the configured weights.
pub fn check(line: usize, sample: &Sample, config: &Config) -> Option<Mismatch> {
    let computed = delta_e(&sample.reference, &sample.sample, &config.weights);
    if within_tolerance(sample.delta_e, computed, config.tolerance) {
        None
    } else {
        Some(Mismatch {
            line,
            sample: *sample,
            computed,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Report {
    /// Well-formed records that were recomputed.
    pub checked: usize,
    pub mismatches: Vec<Mismatch>,
    /// Line numbers of records that could not be parsed.
    pub malformed: Vec<usize>,
    /// Set when the run stopped early at the mismatch cap.
    pub truncated: bool,
}

impl Report {
    pub fn is_success(&self) -> bool {
        self.mismatches.is_empty() && self.malformed.is_empty()
    }

    /// Largest absolute difference among the mismatches, if any.
    pub fn worst(&self) -> Option<&Mismatch> {
        self.mismatches
            .iter()
            .max_by(|a, b| a.difference().total_cmp(&b.difference()))
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Checks every record, stopping once `config.max_mismatches` is reached.
///
/// Only I/O errors abort the run.
pub fn compare_samples<I>(records: I, config: &Config) -> Result<Report>
where
    I: IntoIterator<Item = (usize, Result<Sample>)>,
{
    let mut report = Report::default();

    for (line, record) in records {
        let sample = match record {
            Ok(sample) => sample,
            Err(Error::Io(e)) => return Err(Error::Io(e)),
            Err(e) => {
                warn!("{e}");
                report.malformed.push(line);
                continue;
            }
        };

        report.checked += 1;
        if let Some(mismatch) = check(line, &sample, config) {
            if sample.reference.is_finite() && sample.sample.is_finite() {
                error!(
                    "Mismatch at line {}: expected {}, got {}",
                    line, mismatch.sample.delta_e, mismatch.computed
                );
            } else {
                error!(
                    "Mismatch at line {}: non-finite color in {} or {}",
                    line, sample.reference, sample.sample
                );
            }
            report.mismatches.push(mismatch);
            if config.max_mismatches != 0 && report.mismatches.len() >= config.max_mismatches {
                report.truncated = true;
                break;
            }
        }

        if report.checked % 100_000 == 0 {
            debug!("Checked {} records", report.checked);
        }
    }

    Ok(report)
}

pub fn compare_reader<R: BufRead>(reader: R, config: &Config) -> Result<Report> {
    compare_samples(read_samples(reader), config)
}
