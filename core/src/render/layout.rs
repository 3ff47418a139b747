use crate::bridge::BenchmarkRecord;
use serde::Serialize;

/// Headroom above the largest bar so labels stay readable.
pub const BAR_PADDING: f64 = 1.2;

/// Fixed bar palette, picked by bar position within a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BarColor {
    Green,
    Blue,
    Brown,
    Red,
    Cyan,
}

impl BarColor {
    pub const PALETTE: [BarColor; 5] = [
        BarColor::Green,
        BarColor::Blue,
        BarColor::Brown,
        BarColor::Red,
        BarColor::Cyan,
    ];

    /// Palette entry for a bar position; wraps past the last colour.
    pub fn for_position(position: usize) -> Self {
        Self::PALETTE[position % Self::PALETTE.len()]
    }

    pub fn name(&self) -> &'static str {
        match self {
            BarColor::Green => "green",
            BarColor::Blue => "blue",
            BarColor::Brown => "brown",
            BarColor::Red => "red",
            BarColor::Cyan => "cyan",
        }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            BarColor::Green => (0, 128, 0),
            BarColor::Blue => (0, 0, 255),
            BarColor::Brown => (165, 42, 42),
            BarColor::Red => (255, 0, 0),
            BarColor::Cyan => (0, 255, 255),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub value: f64,
    /// Share of the block width, in percent.
    pub width_percent: f64,
    pub color: BarColor,
    pub label: String,
}

/// One titled block per benchmark case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarBlock {
    pub index: usize,
    pub title: String,
    pub bars: Vec<Bar>,
}

impl BarBlock {
    /// Lays out `values` relative to their own maximum plus padding.
    pub fn layout(index: usize, name: &str, values: &[f64]) -> Self {
        let max = values.iter().copied().fold(0.0_f64, f64::max) * BAR_PADDING;
        let bars = values
            .iter()
            .enumerate()
            .map(|(position, &value)| Bar {
                value,
                width_percent: if max > 0.0 { 100.0 * value / max } else { 0.0 },
                color: BarColor::for_position(position),
                label: format_value(value),
            })
            .collect();

        Self {
            index,
            title: format!("{} {}", index, name),
            bars,
        }
    }

    pub fn for_record(index: usize, record: &BenchmarkRecord) -> Self {
        Self::layout(index, &record.name, &record.timings())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: BarColor,
}

/// Head legend naming what each bar position stands for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    pub fn timings() -> Self {
        let entries = ["C version(us)", "NEON version(us)"]
            .iter()
            .enumerate()
            .map(|(position, label)| LegendEntry {
                label: (*label).to_string(),
                color: BarColor::for_position(position),
            })
            .collect();
        Self { entries }
    }
}

/// Shortest form of a timing value: `120`, `12.5`.
pub fn format_value(value: f64) -> String {
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn largest_bar_fills_five_sixths() {
        let block = BarBlock::layout(1, "abs_float", &[120.0, 40.0]);
        assert!((block.bars[0].width_percent - 100.0 / 1.2).abs() < 1e-9);
        assert!((block.bars[1].width_percent - 100.0 * 40.0 / 144.0).abs() < 1e-9);
    }

    #[test]
    fn colours_follow_bar_position() {
        let block = BarBlock::layout(3, "fir", &[5.0, 2.0]);
        assert_eq!(block.bars[0].color, BarColor::Green);
        assert_eq!(block.bars[1].color, BarColor::Blue);
        assert_eq!(block.title, "3 fir");
        assert_eq!(block.bars[0].label, "5");
        assert_eq!(BarColor::for_position(5), BarColor::Green);
    }

    #[test]
    fn zero_block_lays_out_empty_bars() {
        let block = BarBlock::layout(1, "setc_float", &[0.0, 0.0]);
        assert!(block.bars.iter().all(|bar| bar.width_percent == 0.0));
    }

    #[test]
    fn legend_names_reference_then_accelerated() {
        let legend = Legend::timings();
        assert_eq!(legend.entries[0].label, "C version(us)");
        assert_eq!(legend.entries[1].color, BarColor::Blue);
    }

    #[test]
    fn values_print_without_trailing_zeroes() {
        assert_eq!(format_value(120.0), "120");
        assert_eq!(format_value(12.5), "12.5");
    }
}
