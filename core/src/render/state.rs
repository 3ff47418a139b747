use crate::bridge::BenchmarkRecord;

/// Totals accumulated over every record rendered so far.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunState {
    pub case_count: usize,
    pub cumulative_speedup: f64,
    pub degenerate_cases: usize,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one record and returns its speed-up ratio.
    pub fn accumulate(&mut self, record: &BenchmarkRecord) -> f64 {
        let ratio = record.speedup_ratio();
        self.case_count += 1;
        self.cumulative_speedup += ratio;
        if !ratio.is_finite() {
            self.degenerate_cases += 1;
        }
        ratio
    }

    /// Mean speed-up, or `None` before the first case.
    pub fn average_speedup(&self) -> Option<f64> {
        if self.case_count == 0 {
            None
        } else {
            Some(self.cumulative_speedup / self.case_count as f64)
        }
    }
}
