use crate::math::stats::StatsHelper;
use crate::render::state::RunState;
use serde::Serialize;

/// Final result indicators: accelerated path against the fixed C baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub case_count: usize,
    pub average_speedup: Option<f64>,
    pub degenerate_cases: usize,
}

impl Summary {
    pub fn from_state(state: &RunState) -> Self {
        Self {
            case_count: state.case_count,
            average_speedup: state.average_speedup(),
            degenerate_cases: state.degenerate_cases,
        }
    }

    fn finite_average(&self) -> Option<f64> {
        self.average_speedup.filter(|avg| avg.is_finite())
    }

    /// `"300%"` for an average speed-up of 3.0; `"n/a"` when undefined.
    pub fn accelerated_percent(&self) -> String {
        match self.finite_average() {
            Some(avg) => format!("{}%", StatsHelper::floor_percent(avg)),
            None => "n/a".to_string(),
        }
    }

    pub fn accelerated_label(&self) -> String {
        format!("Ne10 version  {}", self.accelerated_percent())
    }

    pub fn reference_label(&self) -> String {
        "C version  100%".to_string()
    }

    /// Height of the baseline bar relative to the accelerated one.
    pub fn reference_bar_percent(&self) -> Option<f64> {
        self.finite_average()
            .filter(|avg| *avg > 0.0)
            .map(|avg| 100.0 / avg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::BenchmarkRecord;

    fn state_of(records: &[(f64, f64)]) -> RunState {
        let mut state = RunState::new();
        for (c, neon) in records {
            state.accumulate(&BenchmarkRecord::new("case", *c, *neon));
        }
        state
    }

    #[test]
    fn average_of_two_cases_displays_percent() {
        let summary = Summary::from_state(&state_of(&[(100.0, 50.0), (200.0, 50.0)]));
        assert_eq!(summary.average_speedup, Some(3.0));
        assert_eq!(summary.accelerated_percent(), "300%");
        assert_eq!(summary.accelerated_label(), "Ne10 version  300%");
        assert_eq!(summary.reference_label(), "C version  100%");
        assert!((summary.reference_bar_percent().unwrap() - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn undefined_average_displays_not_available() {
        let empty = Summary::from_state(&RunState::new());
        assert_eq!(empty.accelerated_percent(), "n/a");

        let degenerate = Summary::from_state(&state_of(&[(10.0, 0.0)]));
        assert_eq!(degenerate.accelerated_percent(), "n/a");
        assert_eq!(degenerate.reference_bar_percent(), None);
        assert_eq!(degenerate.degenerate_cases, 1);
    }
}
