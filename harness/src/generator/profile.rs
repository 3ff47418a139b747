use crate::generator::catalog::{Family, SuiteFunction};
use crate::generator::kernels;
use benchcore::bridge::BenchmarkRecord;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// How case timings are obtained.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TimingMode {
    /// Seeded pseudo-random timings shaped like a real device run.
    Synthetic,
    /// Wall-clock timings of reference vs accelerated kernels on this host.
    Measured,
}

/// Configuration for producing benchmark records.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub mode: TimingMode,
    pub seed: u64,
    /// Relative noise applied to synthetic reference timings.
    pub jitter: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            mode: TimingMode::Synthetic,
            seed: 0,
            jitter: 0.05,
        }
    }
}

struct FamilyProfile {
    base_reference_us: f64,
    speedup: (f64, f64),
}

fn family_profile(family: Family) -> FamilyProfile {
    match family {
        Family::Math => FamilyProfile {
            base_reference_us: 600.0,
            speedup: (1.5, 4.0),
        },
        Family::Matrix => FamilyProfile {
            base_reference_us: 900.0,
            speedup: (2.0, 5.0),
        },
        Family::Filter => FamilyProfile {
            base_reference_us: 2400.0,
            speedup: (1.2, 3.5),
        },
    }
}

/// Produces the records of one suite function at a time.
pub struct TimingGenerator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl TimingGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self { config, rng }
    }

    /// Restarts the pseudo-random sequence from the configured seed.
    pub fn reseed(&mut self) {
        self.rng = StdRng::seed_from_u64(self.config.seed);
    }

    pub fn records_for(&mut self, function: &SuiteFunction) -> Vec<BenchmarkRecord> {
        (0..function.variants.len())
            .map(|variant| {
                let (time_c, time_neon) = match self.config.mode {
                    TimingMode::Synthetic => self.synthetic(function.family, variant),
                    TimingMode::Measured => {
                        let measurement = kernels::measure(function.family, variant);
                        (measurement.time_reference, measurement.time_accelerated)
                    }
                };
                BenchmarkRecord::new(function.case_name(variant), time_c, time_neon)
                    .with_derived_columns()
            })
            .collect()
    }

    fn synthetic(&mut self, family: Family, variant: usize) -> (f64, f64) {
        let profile = family_profile(family);
        let scale = 1.0 + variant as f64 * 0.5;
        let jitter = self.config.jitter.abs();
        let noise = if jitter > 0.0 {
            self.rng.gen_range(-jitter..jitter)
        } else {
            0.0
        };
        let speedup = self.rng.gen_range(profile.speedup.0..profile.speedup.1);

        let time_c = (profile.base_reference_us * scale * (1.0 + noise)).round().max(1.0);
        let time_neon = (time_c / speedup).round().max(1.0);
        (time_c, time_neon)
    }
}
