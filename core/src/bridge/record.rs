use crate::math::stats::StatsHelper;
use serde::{Deserialize, Serialize};

/// One benchmark case as reported by the native harness.
///
/// Timings are in microseconds. `time_c` is the plain C reference path and
/// `time_neon` the NEON-accelerated path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    pub name: String,
    pub time_c: f64,
    pub time_neon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_savings: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_speedup: Option<f32>,
}

impl BenchmarkRecord {
    pub fn new(name: impl Into<String>, time_c: f64, time_neon: f64) -> Self {
        Self {
            name: name.into(),
            time_c,
            time_neon,
            time_savings: None,
            time_speedup: None,
        }
    }

    /// Fills the informational savings/speed-up columns from the timings.
    pub fn with_derived_columns(mut self) -> Self {
        self.time_savings = Some(StatsHelper::time_savings(self.time_c, self.time_neon) as f32);
        self.time_speedup = Some(self.speedup_ratio() as f32);
        self
    }

    /// `time_c / time_neon`; non-finite when `time_neon` is zero.
    pub fn speedup_ratio(&self) -> f64 {
        StatsHelper::speedup_ratio(self.time_c, self.time_neon)
    }

    /// Bar values in display order.
    pub fn timings(&self) -> [f64; 2] {
        [self.time_c, self.time_neon]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_reads_minimal_wire_form() {
        let record: BenchmarkRecord =
            serde_json::from_str(r#"{"name":"abs_float","time_c":120,"time_neon":40}"#).unwrap();
        assert_eq!(record.time_c, 120.0);
        assert_eq!(record.speedup_ratio(), 3.0);
        assert!(record.time_savings.is_none());
    }

    #[test]
    fn derived_columns_follow_timings() {
        let record = BenchmarkRecord::new("mul_vec2", 200.0, 50.0).with_derived_columns();
        assert_eq!(record.time_speedup, Some(4.0));
        assert_eq!(record.time_savings, Some(75.0));
    }

    #[test]
    fn zero_neon_time_yields_non_finite_ratio() {
        let record = BenchmarkRecord::new("setc_float", 10.0, 0.0);
        assert!(record.speedup_ratio().is_infinite());
    }
}
