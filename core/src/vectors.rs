//! Test-vector exchange format.
//!
//! One record per line, seven comma-separated decimal numbers:
//! `L1,a1,b1,L2,a2,b2,deltaE`. Files in this format are written by any
//! implementation of the formula and read back by every other one.

use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use tabled::Tabled;

use crate::color::Lab;
use crate::error::{Error, Result};

const FIELD_COUNT: usize = 7;

/// Two colors and the ΔE00 recorded for them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "cli", derive(Tabled))]
pub struct Sample {
    pub reference: Lab,
    pub sample: Lab,
    #[cfg_attr(feature = "cli", tabled(rename = "ΔE00"))]
    pub delta_e: f64,
}

impl Sample {
    pub const fn new(reference: Lab, sample: Lab, delta_e: f64) -> Self {
        Self {
            reference,
            sample,
            delta_e,
        }
    }

    /// Builds a record whose ΔE00 is computed here.
    pub fn computed(reference: Lab, sample: Lab) -> Self {
        Self::new(reference, sample, reference.delta_e(&sample))
    }
}

/// Parses one record. `line` is only used to label errors.
pub fn parse_line(line: usize, text: &str) -> Result<Sample> {
    let mut values = [0.0_f64; FIELD_COUNT];
    let mut count = 0;

    for field in text.trim().split(',') {
        if count == FIELD_COUNT {
            return Err(Error::MalformedRecord {
                line,
                reason: format!("expected {FIELD_COUNT} fields, found more"),
            });
        }
        let field = field.trim();
        values[count] = field.parse::<f64>().map_err(|e| Error::MalformedRecord {
            line,
            reason: format!("invalid number '{field}': {e}"),
        })?;
        count += 1;
    }

    if count != FIELD_COUNT {
        return Err(Error::MalformedRecord {
            line,
            reason: format!("expected {FIELD_COUNT} fields, found {count}"),
        });
    }

    let [l1, a1, b1, l2, a2, b2, delta_e] = values;
    Ok(Sample::new(
        Lab::new(l1, a1, b1),
        Lab::new(l2, a2, b2),
        delta_e,
    ))
}

impl FromStr for Sample {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_line(1, s)
    }
}

// `{}` on f64 prints the shortest text that parses back to the same bits.
impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Sample {
            reference: r,
            sample: s,
            delta_e,
        } = self;
        write!(
            f,
            "{},{},{},{},{},{},{}",
            r.l, r.a, r.b, s.l, s.a, s.b, delta_e
        )
    }
}

/// Lazily reads records, pairing each with its 1-based line number.
///
/// Blank lines are skipped. A malformed record, including one that is not
/// valid UTF-8, yields an `Err` for that line only, so callers can keep going.
/// Only a failed read yields `Error::Io`.
pub fn read_samples<R: BufRead>(reader: R) -> impl Iterator<Item = (usize, Result<Sample>)> {
    reader
        .split(b'\n')
        .enumerate()
        .filter_map(|(index, line)| {
            let line_no = index + 1;
            let bytes = match line {
                Ok(bytes) => bytes,
                Err(e) => return Some((line_no, Err(Error::Io(e)))),
            };
            match String::from_utf8(bytes) {
                Ok(text) if text.trim().is_empty() => None,
                Ok(text) => Some((line_no, parse_line(line_no, &text))),
                Err(e) => Some((
                    line_no,
                    Err(Error::MalformedRecord {
                        line: line_no,
                        reason: format!("not valid UTF-8: {}", e.utf8_error()),
                    }),
                )),
            }
        })
}

/// Writes one record per line and flushes. Returns the number of records.
pub fn write_samples<W, I>(mut writer: W, samples: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = Sample>,
{
    let mut written = 0;
    for sample in samples {
        writeln!(writer, "{sample}")?;
        written += 1;
    }
    writer.flush()?;
    Ok(written)
}
