use anyhow::Context;
use benchcore::source::ReplaySource;
use bridge::server::BenchBridge;
use clap::Parser;
use std::fs;
use std::io;
use std::path::PathBuf;
use surface::TerminalSurface;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::WorkflowConfig;
use workflow::runner::Runner;

mod bridge;
mod generator;
mod surface;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Host-side driver for the Ne10 benchmark renderer")]
struct Args {
    /// Run the suite in-process and render it on the terminal
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Load a workflow config from YAML
    #[arg(long)]
    workflow: Option<PathBuf>,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Time real reference/accelerated kernels instead of synthetic timings
    #[arg(long, default_value_t = false)]
    measured: bool,
    /// Deliver batches from a host thread instead of polling for them
    #[arg(long, default_value_t = false)]
    push: bool,
    /// Override the number of cases the renderer waits for
    #[arg(long)]
    expected_total: Option<usize>,
    /// Ignore the case total and finish on end-of-stream only
    #[arg(long, default_value_t = false)]
    until_end: bool,
    #[arg(long)]
    poll_delay_ms: Option<u64>,
    /// Replay a recorded run (JSON array of batches) instead of the suite
    #[arg(long)]
    replay: Option<PathBuf>,
    /// Write the generated suite as a replayable recording and exit
    #[arg(long)]
    record: Option<PathBuf>,
    /// Append a one-line summary to this file after the run
    #[arg(long)]
    report: Option<PathBuf>,
    #[arg(long, default_value_t = false)]
    no_color: bool,
    /// Keep the HTTP bridge alive for front-ends to poll
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut workflow_config = if let Some(path) = &args.workflow {
        WorkflowConfig::load(path)?
    } else {
        WorkflowConfig::from_args(args.seed, args.measured, args.push)
    };
    if let Some(total) = args.expected_total {
        workflow_config.expected_total = Some(total);
    }
    if args.until_end {
        workflow_config.expected_total = None;
    }
    if let Some(delay) = args.poll_delay_ms {
        workflow_config.poll_delay_ms = delay;
    }
    if args.report.is_some() {
        workflow_config.report_path = args.report.clone();
    }

    let runner = Runner::new(workflow_config.clone());

    if let Some(path) = &args.record {
        let recording = runner.cursor().record_remaining();
        let text = serde_json::to_string_pretty(&recording).context("encoding recording")?;
        fs::write(path, text).with_context(|| format!("writing recording {}", path.display()))?;
        println!("Recorded {} batches to {}", recording.len(), path.display());
        return Ok(());
    }

    let runtime = TokioBuilder::new_current_thread()
        .enable_all()
        .build()
        .context("creating runtime")?;

    if args.offline || args.replay.is_some() {
        let surface = TerminalSurface::new(io::stdout().lock(), !args.no_color);
        let (report, mut surface) = runtime.block_on(async {
            match &args.replay {
                Some(path) => {
                    let text = fs::read_to_string(path)
                        .with_context(|| format!("reading recording {}", path.display()))?;
                    let source = ReplaySource::from_recording(&text)
                        .with_context(|| format!("parsing recording {}", path.display()))?;
                    runner.execute_replay(surface, source).await
                }
                None => runner.execute(surface).await,
            }
        })?;
        if let Some(err) = surface.take_error() {
            return Err(err).context("writing to terminal");
        }
        log::info!(
            "run finished: {} polls, {} batches, {} cases",
            report.metrics.polls,
            report.metrics.batches,
            report.metrics.records
        );
    }

    if args.serve {
        let cursor = runner.cursor();
        let total_cases = cursor.total_cases();
        let bridge = BenchBridge::new(cursor, workflow_config.to_suite_info());
        bridge.spawn(workflow_config.bind_address);
        println!(
            "[bridge] serving {} cases on http://{} (Ctrl+C to stop)...",
            total_cases, workflow_config.bind_address
        );
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}
