use bon::Builder;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "wasm")]
use tsify::Tsify;

use crate::error::{Error, Result};

/// Largest absolute difference two ΔE00 values may have and still agree.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Mismatches reported before a comparison run gives up.
pub const DEFAULT_MAX_MISMATCHES: usize = 10;

/// Parametric factors `k_L`, `k_C` and `k_H` of CIEDE2000.
///
/// All three are 1.0 under the reference viewing conditions. Raising one of
/// them divides the matching term and so lowers its weight in the result.
#[derive(Debug, Clone, Copy, PartialEq, Builder)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[cfg_attr(feature = "wasm", derive(Tsify))]
#[cfg_attr(feature = "wasm", tsify(into_wasm_abi, from_wasm_abi))]
pub struct Weights {
    /// k_L
    #[builder(default = 1.0)]
    pub lightness: f64,

    /// k_C
    #[builder(default = 1.0)]
    pub chroma: f64,

    /// k_H
    #[builder(default = 1.0)]
    pub hue: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            lightness: 1.0,
            chroma: 1.0,
            hue: 1.0,
        }
    }
}

impl Weights {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("lightness", self.lightness),
            ("chroma", self.chroma),
            ("hue", self.hue),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidWeight { name, value });
            }
        }
        Ok(())
    }

    pub fn validated(weights: Self) -> Result<Self> {
        weights.validate()?;
        Ok(weights)
    }
}

#[derive(Debug, Clone, Builder)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    #[builder(default)]
    pub weights: Weights,

    #[builder(default = DEFAULT_TOLERANCE)]
    pub tolerance: f64,

    /// 0 disables the cap
    #[builder(default = DEFAULT_MAX_MISMATCHES)]
    pub max_mismatches: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ k_L: {}, k_C: {}, k_H: {}, tolerance: {:e}, max_mismatches: {} }}",
            self.weights.lightness,
            self.weights.chroma,
            self.weights.hue,
            self.tolerance,
            self.max_mismatches,
        )
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;

        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(Error::InvalidTolerance(self.tolerance));
        }

        Ok(())
    }

    pub fn validated(config: Self) -> Result<Self> {
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let config = Config::builder().build();
        assert_eq!(config.weights, Weights::default());
        assert_eq!(config.tolerance, DEFAULT_TOLERANCE);
        assert_eq!(config.max_mismatches, DEFAULT_MAX_MISMATCHES);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn weights_builder_fills_missing_factors() {
        let weights = Weights::builder().lightness(2.0).build();
        assert_eq!(weights.lightness, 2.0);
        assert_eq!(weights.chroma, 1.0);
        assert_eq!(weights.hue, 1.0);
    }

    #[test]
    fn rejects_bad_weights() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let weights = Weights::builder().chroma(bad).build();
            match Weights::validated(weights) {
                Err(Error::InvalidWeight { name, .. }) => assert_eq!(name, "chroma"),
                other => panic!("expected InvalidWeight for {bad}, got {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_bad_tolerance() {
        for bad in [-1e-10, f64::NAN, f64::INFINITY] {
            let config = Config::builder().tolerance(bad).build();
            assert!(matches!(
                config.validate(),
                Err(Error::InvalidTolerance(_))
            ));
        }
        let exact = Config::builder().tolerance(0.0).build();
        assert!(Config::validated(exact).is_ok());
    }

    #[test]
    fn display_mentions_every_setting() {
        let config = Config::builder().max_mismatches(3).build();
        let text = config.to_string();
        assert!(text.contains("k_L: 1"));
        assert!(text.contains("tolerance: 1e-10"));
        assert!(text.contains("max_mismatches: 3"));
    }
}
