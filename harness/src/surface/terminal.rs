use benchcore::render::{BarBlock, BarColor, Legend, ProgressView, Summary};
use benchcore::Surface;
use std::io::{self, Write};

/// Columns a full-width bar occupies.
const BAR_COLUMNS: usize = 48;

/// Text rendition of the demo page: one block per case, a progress line and
/// the two result indicators.
pub struct TerminalSurface<W: Write> {
    out: W,
    color: bool,
    error: Option<io::Error>,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            error: None,
        }
    }

    /// First write failure, if any. Rendering stops writing after it.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, line: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.out, "{}", line) {
            self.error = Some(err);
        }
    }

    fn paint(&self, text: &str, color: BarColor) -> String {
        if !self.color {
            return text.to_string();
        }
        let (r, g, b) = color.rgb();
        format!("\x1b[38;2;{};{};{}m{}\x1b[0m", r, g, b, text)
    }
}

fn columns_for(percent: f64) -> usize {
    if !percent.is_finite() || percent <= 0.0 {
        return 0;
    }
    ((percent / 100.0) * BAR_COLUMNS as f64).round().min(BAR_COLUMNS as f64) as usize
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn show_legend(&mut self, legend: &Legend) {
        let line = legend
            .entries
            .iter()
            .map(|entry| format!("{} {}", self.paint("■", entry.color), entry.label))
            .collect::<Vec<_>>()
            .join("   ");
        self.emit(&line);
    }

    fn append_block(&mut self, block: &BarBlock) {
        self.emit(&block.title);
        for bar in &block.bars {
            let body = "█".repeat(columns_for(bar.width_percent));
            let line = format!("  {} {}", self.paint(&body, bar.color), bar.label);
            self.emit(&line);
        }
    }

    fn show_progress(&mut self, progress: &ProgressView) {
        let line = match progress.percent {
            Some(percent) => {
                let filled = columns_for(percent);
                format!(
                    "progress [{}{}] {}",
                    "#".repeat(filled),
                    ".".repeat(BAR_COLUMNS - filled),
                    progress.display
                )
            }
            None => format!("progress {} cases", progress.display),
        };
        self.emit(&line);
    }

    fn show_summary(&mut self, summary: &Summary) {
        self.emit("");
        let accelerated = self.paint(&summary.accelerated_label(), BarColor::Blue);
        self.emit(&accelerated);
        let reference = self.paint(&summary.reference_label(), BarColor::Green);
        self.emit(&reference);
        if summary.degenerate_cases > 0 {
            let note = format!(
                "({} cases had a zero accelerated time)",
                summary.degenerate_cases
            );
            self.emit(&note);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchcore::bridge::BenchmarkRecord;
    use benchcore::render::{RenderConfig, Renderer};
    use benchcore::source::ReplaySource;

    fn render_plain(batches: Vec<Vec<BenchmarkRecord>>, expected_total: Option<usize>) -> String {
        let surface = TerminalSurface::new(Vec::new(), false);
        let mut renderer = Renderer::new(surface, RenderConfig { expected_total });
        renderer.start();
        let mut source = ReplaySource::from_batches(batches).unwrap();
        while renderer.poll_once(&mut source).unwrap() == benchcore::render::PollOutcome::Continue {}
        let mut surface = renderer.into_surface();
        assert!(surface.take_error().is_none());
        String::from_utf8(surface.into_inner()).unwrap()
    }

    #[test]
    fn plain_output_lists_blocks_and_summary() {
        let output = render_plain(
            vec![vec![
                BenchmarkRecord::new("abs_float", 100.0, 50.0),
                BenchmarkRecord::new("abs_vec2", 200.0, 50.0),
            ]],
            Some(2),
        );
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[0], "■ C version(us)   ■ NEON version(us)");
        assert_eq!(lines[1], "1 abs_float");
        assert_eq!(lines[2], format!("  {} 100", "█".repeat(40)));
        assert_eq!(lines[3], format!("  {} 50", "█".repeat(20)));
        assert!(output.contains(&format!("progress [{}] 100%", "#".repeat(48))));
        assert!(output.contains("Ne10 version  300%"));
        assert!(output.contains("C version  100%"));
    }

    #[test]
    fn unknown_total_prints_case_count() {
        let output = render_plain(vec![vec![BenchmarkRecord::new("dot_vec2", 3.0, 1.0)]], None);
        assert!(output.contains("progress 1 cases"));
    }

    #[test]
    fn colour_wraps_bars_in_escape_codes() {
        let surface = TerminalSurface::new(Vec::new(), true);
        assert_eq!(
            surface.paint("x", BarColor::Green),
            "\x1b[38;2;0;128;0mx\x1b[0m"
        );
    }
}
