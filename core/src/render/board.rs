use crate::prelude::Surface;
use crate::render::{BarBlock, Legend, ProgressView, Summary};

/// In-memory surface that keeps the latest state of every display element.
///
/// Windowed front-ends draw from it; tests inspect it.
#[derive(Debug, Clone, Default)]
pub struct Board {
    pub legend: Option<Legend>,
    pub blocks: Vec<BarBlock>,
    pub progress: Option<ProgressView>,
    pub summary: Option<Summary>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for Board {
    fn show_legend(&mut self, legend: &Legend) {
        self.legend = Some(legend.clone());
    }

    fn append_block(&mut self, block: &BarBlock) {
        self.blocks.push(block.clone());
    }

    fn show_progress(&mut self, progress: &ProgressView) {
        self.progress = Some(progress.clone());
    }

    fn show_summary(&mut self, summary: &Summary) {
        self.summary = Some(summary.clone());
    }
}
