use crate::generator::cursor::SuiteCursor;
use crate::workflow::config::{BridgeModel, WorkflowConfig};
use anyhow::{anyhow, Context};
use benchcore::bridge::encode_batch;
use benchcore::render::{PollOutcome, Renderer, Summary};
use benchcore::source::{PullSource, PushSource, ReplaySource};
use benchcore::telemetry::{MetricsRecorder, MetricsSnapshot};
use benchcore::{BenchResult, ResultSource, Surface};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tokio::time::sleep;

pub struct RunReport {
    pub summary: Option<Summary>,
    pub metrics: MetricsSnapshot,
}

impl RunReport {
    pub fn to_log_line(&self) -> String {
        match &self.summary {
            Some(summary) => format!(
                "cases={} average={} degenerate={} batches={} polls={}\n",
                summary.case_count,
                summary.accelerated_percent(),
                summary.degenerate_cases,
                self.metrics.batches,
                self.metrics.polls
            ),
            None => format!("unfinished batches={}\n", self.metrics.batches),
        }
    }

    pub fn append_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating report directory {}", parent.display()))?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening report {}", path.display()))?;
        file.write_all(self.to_log_line().as_bytes())?;
        Ok(())
    }
}

/// Polls `source` until the renderer finalizes, sleeping `delay` between polls.
pub async fn drive<S, R>(
    renderer: &mut Renderer<S>,
    source: &mut R,
    delay: Duration,
) -> anyhow::Result<()>
where
    S: Surface,
    R: ResultSource + ?Sized,
{
    renderer.start();
    loop {
        match renderer
            .poll_once(source)
            .context("polling benchmark results")?
        {
            PollOutcome::Continue => sleep(delay).await,
            PollOutcome::Finished => return Ok(()),
        }
    }
}

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self { config }
    }

    pub fn cursor(&self) -> SuiteCursor {
        SuiteCursor::new(self.config.generator.clone())
    }

    /// Runs the whole suite in-process over the configured bridge model.
    pub async fn execute<S: Surface>(&self, surface: S) -> anyhow::Result<(RunReport, S)> {
        let mut cursor = self.cursor();
        match self.config.bridge {
            BridgeModel::Pull => {
                let mut source = PullSource::new(move || match cursor.next_payload() {
                    Ok(payload) => Some(payload),
                    Err(err) => {
                        log::error!("bridge could not encode batch: {}", err);
                        None
                    }
                });
                self.run_source(surface, &mut source).await
            }
            BridgeModel::Push => {
                let (handle, mut source) = PushSource::channel();
                let delay = self.config.poll_delay();
                let host = thread::spawn(move || -> BenchResult<()> {
                    while let Some(batch) = cursor.next_batch() {
                        handle.return_from_host(Some(encode_batch(Some(batch.as_slice()))?))?;
                        thread::sleep(delay);
                    }
                    handle.finish()
                });

                let outcome = self.run_source(surface, &mut source).await;
                match host.join() {
                    Ok(Ok(())) => {}
                    Ok(Err(err)) => log::warn!("push host stopped early: {}", err),
                    Err(_) => return Err(anyhow!("push host thread panicked")),
                }
                outcome
            }
        }
    }

    /// Replays a recorded run through the renderer.
    pub async fn execute_replay<S: Surface>(
        &self,
        surface: S,
        mut source: ReplaySource,
    ) -> anyhow::Result<(RunReport, S)> {
        self.run_source(surface, &mut source).await
    }

    async fn run_source<S, R>(&self, surface: S, source: &mut R) -> anyhow::Result<(RunReport, S)>
    where
        S: Surface,
        R: ResultSource + ?Sized,
    {
        let metrics = Arc::new(MetricsRecorder::new());
        let mut renderer =
            Renderer::new(surface, self.config.to_render_config()).with_metrics(metrics.clone());
        drive(&mut renderer, source, self.config.poll_delay()).await?;

        let report = RunReport {
            summary: renderer.summary().cloned(),
            metrics: metrics.snapshot(),
        };
        if let Some(path) = &self.config.report_path {
            report.append_to(path)?;
        }
        Ok((report, renderer.into_surface()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchcore::bridge::BenchmarkRecord;
    use benchcore::render::Board;
    use tempfile::tempdir;

    fn quick(bridge: BridgeModel, expected_total: Option<usize>) -> Runner {
        Runner::new(WorkflowConfig {
            poll_delay_ms: 0,
            bridge,
            expected_total,
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn pull_run_covers_whole_suite() {
        let (report, board) = quick(BridgeModel::Pull, Some(117))
            .execute(Board::new())
            .await
            .unwrap();
        assert_eq!(board.blocks.len(), 117);
        assert_eq!(report.summary.unwrap().case_count, 117);
        assert_eq!(report.metrics.finalized, 1);
        assert_eq!(report.metrics.batches, 30);
        assert_eq!(board.progress.unwrap().display, "100%");
    }

    #[tokio::test]
    async fn push_run_matches_pull_run() {
        let (pull, _) = quick(BridgeModel::Pull, None)
            .execute(Board::new())
            .await
            .unwrap();
        let (push, board) = quick(BridgeModel::Push, None)
            .execute(Board::new())
            .await
            .unwrap();
        assert_eq!(board.blocks.len(), 117);
        assert_eq!(pull.summary, push.summary);
    }

    #[tokio::test]
    async fn replay_finalizes_on_end_of_stream() {
        let source = ReplaySource::from_batches(vec![
            vec![BenchmarkRecord::new("a", 100.0, 50.0)],
            vec![BenchmarkRecord::new("b", 200.0, 50.0)],
        ])
        .unwrap();
        let (report, _) = quick(BridgeModel::Pull, Some(117))
            .execute_replay(Board::new(), source)
            .await
            .unwrap();
        let summary = report.summary.unwrap();
        assert_eq!(summary.case_count, 2);
        assert_eq!(summary.accelerated_percent(), "300%");
    }

    #[tokio::test]
    async fn malformed_replay_aborts_the_run() {
        let source = ReplaySource::new(vec![Some("[{".to_string())]);
        let result = quick(BridgeModel::Pull, None)
            .execute_replay(Board::new(), source)
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn report_line_is_appended() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logs/summary.log");
        let mut runner = quick(BridgeModel::Pull, Some(117));
        runner.config.report_path = Some(path.clone());
        runner.execute(Board::new()).await.unwrap();
        runner.execute(Board::new()).await.unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
        assert!(contents.starts_with("cases=117 "));
    }
}
