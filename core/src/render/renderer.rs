use crate::bridge::{decode_payload, BenchmarkRecord};
use crate::prelude::{BenchError, BenchResult, Delivery, ResultSource, Surface};
use crate::render::{BarBlock, Legend, ProgressView, RunState, Summary};
use crate::telemetry::{LogManager, MetricsRecorder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Size of the stock Ne10 performance suite.
pub const DEFAULT_EXPECTED_CASES: usize = 117;

/// Renderer lifecycle. `Finalized` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    Idle,
    Polling,
    Rendering,
    Finalized,
}

/// Whether the driver should schedule another poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    Continue,
    Finished,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Cases the host is known to produce; `None` waits for end-of-stream only.
    pub expected_total: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            expected_total: Some(DEFAULT_EXPECTED_CASES),
        }
    }
}

/// Drives a [`Surface`] from batches of benchmark records.
pub struct Renderer<S> {
    surface: S,
    state: RunState,
    phase: Phase,
    config: RenderConfig,
    summary: Option<Summary>,
    metrics: Arc<MetricsRecorder>,
    logger: LogManager,
}

impl<S: Surface> Renderer<S> {
    pub fn new(surface: S, config: RenderConfig) -> Self {
        Self {
            surface,
            state: RunState::new(),
            phase: Phase::Idle,
            config,
            summary: None,
            metrics: Arc::new(MetricsRecorder::new()),
            logger: LogManager::new("renderer"),
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<MetricsRecorder>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Shows the legend and arms polling. Calling it again is a no-op.
    pub fn start(&mut self) {
        if self.phase != Phase::Idle {
            return;
        }
        self.surface.show_legend(&Legend::timings());
        self.phase = Phase::Polling;
        self.logger.record(&format!(
            "started, expecting {}",
            self.config
                .expected_total
                .map(|total| format!("{} cases", total))
                .unwrap_or_else(|| "an end-of-stream signal".into())
        ));
    }

    /// Asks `source` for the next delivery and renders it.
    ///
    /// Once finalized the source is no longer consulted.
    pub fn poll_once<R>(&mut self, source: &mut R) -> BenchResult<PollOutcome>
    where
        R: ResultSource + ?Sized,
    {
        match self.phase {
            Phase::Idle => return Err(BenchError::NotStarted),
            Phase::Finalized => return Ok(PollOutcome::Finished),
            Phase::Polling | Phase::Rendering => {}
        }
        self.metrics.record_poll();
        let delivery = source.next_delivery()?;
        self.handle(delivery)
    }

    /// Push entry point: handles one raw payload delivered by the host.
    pub fn ingest(&mut self, payload: Option<&str>) -> BenchResult<PollOutcome> {
        match self.phase {
            Phase::Idle => return Err(BenchError::NotStarted),
            Phase::Finalized => {
                self.logger.caution("payload after finalization ignored");
                return Ok(PollOutcome::Finished);
            }
            Phase::Polling | Phase::Rendering => {}
        }
        let delivery = decode_payload(payload)?;
        self.handle(delivery)
    }

    fn handle(&mut self, delivery: Delivery) -> BenchResult<PollOutcome> {
        match delivery {
            Delivery::Pending => Ok(PollOutcome::Continue),
            Delivery::EndOfStream => {
                self.finalize();
                Ok(PollOutcome::Finished)
            }
            Delivery::Batch(records) => {
                self.render_batch(&records)?;
                if self.update_progress().is_complete() {
                    self.finalize();
                    Ok(PollOutcome::Finished)
                } else {
                    Ok(PollOutcome::Continue)
                }
            }
        }
    }

    /// Appends one block per record and folds each speed-up into the totals.
    pub fn render_batch(&mut self, records: &[BenchmarkRecord]) -> BenchResult<()> {
        match self.phase {
            Phase::Idle => return Err(BenchError::NotStarted),
            Phase::Finalized => {
                self.logger.caution("batch after finalization ignored");
                return Ok(());
            }
            Phase::Polling | Phase::Rendering => {}
        }

        self.phase = Phase::Rendering;
        for record in records {
            let ratio = self.state.accumulate(record);
            if !ratio.is_finite() {
                self.metrics.record_degenerate();
                self.logger.caution(&format!(
                    "case {} has a non-finite speed-up ({} / {})",
                    record.name, record.time_c, record.time_neon
                ));
            }
            let block = BarBlock::for_record(self.state.case_count, record);
            self.surface.append_block(&block);
        }
        self.metrics.record_batch(records.len());
        log::debug!(
            "rendered batch of {} -> {} cases",
            records.len(),
            self.state.case_count
        );
        self.phase = Phase::Polling;
        Ok(())
    }

    pub fn update_progress(&mut self) -> ProgressView {
        let progress = ProgressView::compute(self.state.case_count, self.config.expected_total);
        self.surface.show_progress(&progress);
        progress
    }

    /// Shows the result indicators. Returns the summary only on the first call.
    pub fn finalize(&mut self) -> Option<Summary> {
        if self.phase == Phase::Finalized {
            return None;
        }
        let summary = Summary::from_state(&self.state);
        self.surface.show_summary(&summary);
        self.phase = Phase::Finalized;
        self.metrics.record_finalized();
        self.logger.record(&format!(
            "finalized after {} cases, average speed-up {}",
            summary.case_count,
            summary.accelerated_percent()
        ));
        self.summary = Some(summary.clone());
        Some(summary)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }

    pub fn metrics(&self) -> Arc<MetricsRecorder> {
        self.metrics.clone()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
