use std::f64::consts::PI;

use crate::color::Lab;
use crate::config::Weights;

// --- CIEDE2000 Constants ---
const POW25_7: f64 = 6103515625.0; // 25^7
const HUE_SNAP_EPSILON: f64 = 1e-14;

/// ΔE00 between `lab(l1, a1, b1)` and `lab(l2, a2, b2)` with `k_L = k_C = k_H = 1`.
///
/// Total over finite inputs: the result is always finite and non-negative.
pub fn ciede2000(l1: f64, a1: f64, b1: f64, l2: f64, a2: f64, b2: f64) -> f64 {
    ciede2000_weighted(l1, a1, b1, l2, a2, b2, &Weights::default())
}

/// ΔE00 between two [`Lab`] colors under the given parametric factors.
pub fn delta_e(color1: &Lab, color2: &Lab, weights: &Weights) -> f64 {
    ciede2000_weighted(
        color1.l, color1.a, color1.b, color2.l, color2.a, color2.b, weights,
    )
}

/// ΔE00 with explicit parametric factors.
///
/// The operations below are ordered to match other implementations of the
/// formula to within 1e-10, so they should not be rearranged.
#[allow(clippy::too_many_arguments)]
pub fn ciede2000_weighted(
    l1: f64,
    a1: f64,
    b1: f64,
    l2: f64,
    a2: f64,
    b2: f64,
    weights: &Weights,
) -> f64 {
    // G factor, applied to the a* axis.
    let c_bar7 = pow7((a1.hypot(b1) + a2.hypot(b2)) * 0.5);
    let n = 1.0 + 0.5 * (1.0 - (c_bar7 / (c_bar7 + POW25_7)).sqrt());

    let c1 = (a1 * n).hypot(b1);
    let c2 = (a2 * n).hypot(b2);

    let h1 = normalize_hue(b1.atan2(a1 * n));
    let h2 = normalize_hue(b2.atan2(a2 * n));

    let mut hue_gap = (h2 - h1).abs();
    if (PI - HUE_SNAP_EPSILON..=PI + HUE_SNAP_EPSILON).contains(&hue_gap) {
        hue_gap = PI;
    }

    // Mean hue and half hue difference, taking the short way around the circle.
    let mut h_mean = 0.5 * h1 + 0.5 * h2;
    let mut h_half_diff = (h2 - h1) * 0.5;
    if PI < hue_gap {
        if 0.0 < h_half_diff {
            h_half_diff -= PI;
        } else {
            h_half_diff += PI;
        }
        h_mean += PI;
    }

    // Hue rotation, only significant around the blue region.
    let p = 36.0 * h_mean - 55.0 * PI;
    let c_mean7 = pow7((c1 + c2) * 0.5);
    let r_t = -2.0
        * (c_mean7 / (c_mean7 + POW25_7)).sqrt()
        * (PI / 3.0 * (p * p / (-25.0 * PI * PI)).exp()).sin();

    let l_mean = (l1 + l2) * 0.5;
    let l_offset_sq = (l_mean - 50.0) * (l_mean - 50.0);
    let lightness =
        (l2 - l1) / (weights.lightness * (1.0 + 0.015 * l_offset_sq / (20.0 + l_offset_sq).sqrt()));

    let t = 1.0 + 0.24 * (2.0 * h_mean + PI * 0.5).sin()
        + 0.32 * (3.0 * h_mean + 8.0 * PI / 15.0).sin()
        - 0.17 * (h_mean + PI / 3.0).sin()
        - 0.20 * (4.0 * h_mean + 3.0 * PI / 20.0).sin();

    let c_sum = c1 + c2;
    let hue = 2.0 * (c1 * c2).sqrt() * h_half_diff.sin() / (weights.hue * (1.0 + 0.0075 * c_sum * t));
    let chroma = (c2 - c1) / (weights.chroma * (1.0 + 0.0225 * c_sum));

    (lightness * lightness + hue * hue + chroma * chroma + chroma * hue * r_t).sqrt()
}

#[inline]
fn pow7(x: f64) -> f64 {
    x * x * x * x * x * x * x
}

/// Maps `atan2` output into `[0, 2π)`. Exactly zero stays zero.
#[inline]
fn normalize_hue(h: f64) -> f64 {
    if h < 0.0 {
        h + 2.0 * PI
    } else {
        h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-10;

    fn assert_delta_e(first: [f64; 3], second: [f64; 3], expected: f64) {
        let actual = ciede2000(first[0], first[1], first[2], second[0], second[1], second[2]);
        assert!(
            (actual - expected).abs() <= TOLERANCE,
            "lab{first:?} vs lab{second:?}: expected {expected}, got {actual}"
        );
    }

    #[test]
    fn identical_colors() {
        assert_delta_e([75.0, -20.412, 102.5], [75.0, -20.412, 102.5], 0.0);
    }

    #[test]
    fn small_differences() {
        assert_delta_e([31.0, 38.1, -100.689], [31.0, 38.1, -100.6308], 0.02031251581);
        assert_delta_e([46.6, -9.344, -127.6], [46.6, -9.44, -127.6], 0.03695828417);
        assert_delta_e([62.083, 127.344, 64.731], [62.083, 127.344, 64.73], 0.00032241343);
    }

    #[test]
    fn extreme_ranges() {
        assert_delta_e([2.0, 109.6, 51.9861], [118.2, -54.71, 51.8], 133.04909930124);
        assert_delta_e([126.49, -46.4, 18.7], [10.6, 90.53, 61.79], 117.14241683064);
    }

    #[test]
    fn larger_differences() {
        assert_delta_e([30.4287, 68.1692, -71.4392], [33.18, 30.0, -33.6759], 12.77597894044);
        assert_delta_e([8.9354, 14.5, -67.32], [93.207, 46.638, -31.0], 89.87553727076);
    }

    #[test]
    fn hue_wraparound() {
        // Hue angles on either side of 0/2π, more than π apart.
        assert_delta_e([101.4, 119.5, 13.24], [5.76, -37.965, -110.1606], 130.70704766893);
        assert_delta_e([89.3484, 113.917, 21.77], [84.78, 44.7578, -11.7881], 19.59176199882);
    }

    #[test]
    fn achromatic_pair_is_lightness_only() {
        // Mean lightness of 50 leaves S_L at 1.
        assert_eq!(ciede2000(40.0, 0.0, 0.0, 60.0, 0.0, 0.0), 20.0);
    }

    #[test]
    fn antipodal_hues_are_finite() {
        let d = ciede2000(50.0, 10.0, 0.0, 50.0, -10.0, 0.0);
        assert!(d.is_finite() && d > 0.0, "got {d}");
        let d = ciede2000(50.0, 0.0, 25.0, 50.0, 0.0, -25.0);
        assert!(d.is_finite() && d > 0.0, "got {d}");
    }

    #[test]
    fn negative_zero_hue_is_not_shifted() {
        assert_eq!(normalize_hue(0.0), 0.0);
        assert_eq!(normalize_hue(-0.0), -0.0);
        assert_eq!(normalize_hue(-PI / 2.0), 1.5 * PI);
    }

    #[test]
    fn default_weights_match_unweighted() {
        let first = Lab::new(53.08, -79.0, -126.4543);
        let second = Lab::new(58.3689, -82.06, -96.0);
        assert_eq!(
            delta_e(&first, &second, &Weights::default()).to_bits(),
            ciede2000(first.l, first.a, first.b, second.l, second.a, second.b).to_bits()
        );
    }

    #[test]
    fn lightness_weight_scales_lightness_term() {
        let first = Lab::new(30.0, 0.0, 0.0);
        let second = Lab::new(70.0, 0.0, 0.0);
        let base = delta_e(&first, &second, &Weights::default());
        let halved = delta_e(&first, &second, &Weights::builder().lightness(2.0).build());
        assert!((halved - base / 2.0).abs() < 1e-12, "{halved} vs {base}");
    }

    #[test]
    fn larger_weights_never_increase_difference() {
        let first = Lab::new(35.0346, -80.438, 8.255);
        let second = Lab::new(61.6, -20.0, -86.15);
        let base = delta_e(&first, &second, &Weights::default());
        let relaxed = Weights::builder().lightness(2.0).chroma(2.0).hue(2.0).build();
        assert!(delta_e(&first, &second, &relaxed) < base);
    }
}
