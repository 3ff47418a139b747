use crate::math::stats::StatsHelper;
use serde::Serialize;

/// Progress indicator state after a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressView {
    pub case_count: usize,
    pub expected_total: Option<usize>,
    /// Unfloored percentage, used as the bar width.
    pub percent: Option<f64>,
    pub display: String,
}

impl ProgressView {
    /// Without a known total the display falls back to the raw case count.
    pub fn compute(case_count: usize, expected_total: Option<usize>) -> Self {
        match expected_total.filter(|total| *total > 0) {
            Some(total) => {
                let fraction = case_count as f64 / total as f64;
                Self {
                    case_count,
                    expected_total: Some(total),
                    percent: Some(fraction * 100.0),
                    display: format!("{}%", StatsHelper::floor_percent(fraction)),
                }
            }
            None => Self {
                case_count,
                expected_total: None,
                percent: None,
                display: case_count.to_string(),
            },
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.expected_total, Some(total) if self.case_count >= total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_floors_the_display() {
        let view = ProgressView::compute(58, Some(117));
        assert_eq!(view.display, "49%");
        assert!((view.percent.unwrap() - 49.572_649_572_649_57).abs() < 1e-9);
        assert!(!view.is_complete());
    }

    #[test]
    fn reaching_total_completes() {
        let view = ProgressView::compute(117, Some(117));
        assert_eq!(view.display, "100%");
        assert!(view.is_complete());
    }

    #[test]
    fn unknown_total_shows_case_count() {
        let view = ProgressView::compute(12, None);
        assert_eq!(view.display, "12");
        assert_eq!(view.percent, None);
        assert!(!view.is_complete());
        assert_eq!(ProgressView::compute(3, Some(0)).display, "3");
    }
}
