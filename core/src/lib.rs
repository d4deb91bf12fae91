mod color;
mod config;
mod delta_e;

pub mod compare;
pub mod error;
#[cfg(feature = "generate")]
pub mod generate;
pub mod samples;
pub mod vectors;

pub use color::Lab;
pub use compare::{compare_reader, compare_samples, within_tolerance, Mismatch, Report};
pub use config::{Config, Weights, DEFAULT_MAX_MISMATCHES, DEFAULT_TOLERANCE};
pub use delta_e::{ciede2000, ciede2000_weighted, delta_e};
pub use error::{Error, Result};
#[cfg(feature = "generate")]
pub use generate::Generator;
pub use samples::REFERENCE_SAMPLES;
pub use vectors::{read_samples, write_samples, Sample};
