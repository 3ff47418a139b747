pub struct StatsHelper;

impl StatsHelper {
    /// Reference time over accelerated time. Zero accelerated time is not
    /// guarded and yields `inf` (or `NaN` for `0/0`).
    pub fn speedup_ratio(time_reference: f64, time_accelerated: f64) -> f64 {
        time_reference / time_accelerated
    }

    /// Percentage of the reference time saved by the accelerated path.
    pub fn time_savings(time_reference: f64, time_accelerated: f64) -> f64 {
        if time_reference == 0.0 {
            return 0.0;
        }
        (time_reference - time_accelerated) / time_reference * 100.0
    }

    /// Whole percent, rounded toward negative infinity like the page display.
    pub fn floor_percent(fraction: f64) -> i64 {
        (fraction * 100.0).floor() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speedup_divides_reference_by_accelerated() {
        assert_eq!(StatsHelper::speedup_ratio(100.0, 50.0), 2.0);
        assert!(StatsHelper::speedup_ratio(0.0, 0.0).is_nan());
    }

    #[test]
    fn savings_of_zero_reference_is_zero() {
        assert_eq!(StatsHelper::time_savings(0.0, 5.0), 0.0);
        assert_eq!(StatsHelper::time_savings(80.0, 20.0), 75.0);
    }

    #[test]
    fn floor_percent_truncates_down() {
        assert_eq!(StatsHelper::floor_percent(58.0 / 117.0), 49);
        assert_eq!(StatsHelper::floor_percent(3.0), 300);
    }
}
