use crate::bridge::BenchmarkRecord;
use crate::render::{BarBlock, Legend, ProgressView, Summary};

/// One answer from a result source.
#[derive(Debug, Clone, PartialEq)]
pub enum Delivery {
    /// An ordered batch of records, possibly empty.
    Batch(Vec<BenchmarkRecord>),
    /// Nothing queued yet; poll again after the delay.
    Pending,
    /// The host has no more data.
    EndOfStream,
}

/// Common error type for bridge decoding and renderer execution.
#[derive(thiserror::Error, Debug)]
pub enum BenchError {
    #[error("malformed bridge payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
    #[error("renderer not started")]
    NotStarted,
    #[error("bridge failure: {0}")]
    Bridge(String),
}

pub type BenchResult<T> = Result<T, BenchError>;

/// Anything the renderer can pull the next batch from.
///
/// Pull-style bridges answer directly; push-style bridges queue what the host
/// delivered and answer `Pending` while the queue is empty.
pub trait ResultSource {
    fn next_delivery(&mut self) -> BenchResult<Delivery>;
}

/// Display target driven by the renderer.
pub trait Surface {
    fn show_legend(&mut self, legend: &Legend);
    fn append_block(&mut self, block: &BarBlock);
    fn show_progress(&mut self, progress: &ProgressView);
    fn show_summary(&mut self, summary: &Summary);
}
