use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "wasm")]
use tsify::Tsify;

use crate::delta_e::ciede2000;

/// A color in the CIE L*a*b* space.
///
/// `l` is conventionally within `[0, 100]` and `a`, `b` within roughly
/// `[-128, 128]`, but any finite value is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "wasm", derive(Tsify))]
#[cfg_attr(feature = "wasm", tsify(into_wasm_abi, from_wasm_abi))]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// ΔE00 between `self` and `other` under default viewing conditions.
    pub fn delta_e(&self, other: &Lab) -> f64 {
        ciede2000(self.l, self.a, self.b, other.l, other.a, other.b)
    }

    pub fn is_finite(&self) -> bool {
        self.l.is_finite() && self.a.is_finite() && self.b.is_finite()
    }
}

impl From<[f64; 3]> for Lab {
    fn from([l, a, b]: [f64; 3]) -> Self {
        Self { l, a, b }
    }
}

impl From<Lab> for [f64; 3] {
    fn from(lab: Lab) -> Self {
        [lab.l, lab.a, lab.b]
    }
}

impl fmt::Display for Lab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lab({:?}, {:?}, {:?})", self.l, self.a, self.b)
    }
}
