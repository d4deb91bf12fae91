use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::color::Lab;
use crate::error::{Error, Result};
use crate::vectors::Sample;

/// Upper bound on the number of generated records per run.
pub const MAX_COUNT: usize = 100_000_000;

/// Random color with `L` in `[0, 100]` and `a`, `b` in `[-128, 128]`.
///
/// Each component is truncated to an integer with probability 1/2, which
/// puts exact zeros and axis-aligned hues into the mix.
pub fn random_lab<R: Rng + ?Sized>(rng: &mut R) -> Lab {
    let mut components: [f64; 3] = [
        rng.random_range(0.0..=100.0),
        rng.random_range(-128.0..=128.0),
        rng.random_range(-128.0..=128.0),
    ];
    for value in &mut components {
        if rng.random_bool(0.5) {
            *value = value.trunc();
        }
    }
    Lab::from(components)
}

/// Two random colors and their ΔE00.
pub fn random_sample<R: Rng + ?Sized>(rng: &mut R) -> Sample {
    let reference = random_lab(rng);
    let sample = random_lab(rng);
    Sample::computed(reference, sample)
}

pub fn validate_count(count: usize) -> Result<usize> {
    if count == 0 || count > MAX_COUNT {
        return Err(Error::InvalidCount {
            value: count,
            max: MAX_COUNT,
        });
    }
    Ok(count)
}

/// Endless stream of random test vectors.
pub struct Generator {
    rng: StdRng,
}

impl Generator {
    /// Reproducible stream.
    pub fn seeded(seed: u64) -> Self {
        log::debug!("Seeding generator with {seed}");
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Iterator for Generator {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        Some(random_sample(&mut self.rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let lab = random_lab(&mut rng);
            assert!((0.0..=100.0).contains(&lab.l), "{lab}");
            assert!((-128.0..=128.0).contains(&lab.a), "{lab}");
            assert!((-128.0..=128.0).contains(&lab.b), "{lab}");
        }
    }

    #[test]
    fn mixes_integers_and_fractions() {
        let mut rng = StdRng::seed_from_u64(11);
        let values: Vec<f64> = (0..1_000)
            .flat_map(|_| <[f64; 3]>::from(random_lab(&mut rng)))
            .collect();
        let integers = values.iter().filter(|v| v.fract() == 0.0).count();
        assert!(integers > 1_000 && integers < 2_000, "{integers} integers");
    }

    #[test]
    fn seeded_generators_repeat() {
        let first: Vec<Sample> = Generator::seeded(42).take(50).collect();
        let second: Vec<Sample> = Generator::seeded(42).take(50).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn generated_delta_e_matches_colors() {
        for sample in Generator::seeded(3).take(100) {
            assert_eq!(sample.delta_e, sample.reference.delta_e(&sample.sample));
            assert!(sample.delta_e.is_finite() && sample.delta_e >= 0.0);
        }
    }

    #[test]
    fn count_bounds() {
        assert!(validate_count(0).is_err());
        assert_eq!(validate_count(10_000).unwrap(), 10_000);
        assert!(matches!(
            validate_count(MAX_COUNT + 1),
            Err(Error::InvalidCount { .. })
        ));
    }
}
