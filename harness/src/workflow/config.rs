use crate::bridge::model::SuiteInfo;
use crate::generator::profile::{GeneratorConfig, TimingMode};
use anyhow::Context;
use benchcore::render::{RenderConfig, DEFAULT_EXPECTED_CASES};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// How results travel from the host to the renderer.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BridgeModel {
    /// Renderer calls the bridge on every poll.
    Pull,
    /// Host thread pushes each batch as soon as it is ready.
    Push,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    /// Cases the suite produces; `~` waits for end-of-stream only.
    pub expected_total: Option<usize>,
    pub poll_delay_ms: u64,
    pub bridge: BridgeModel,
    pub generator: GeneratorConfig,
    pub bind_address: SocketAddr,
    pub report_path: Option<PathBuf>,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            expected_total: Some(DEFAULT_EXPECTED_CASES),
            poll_delay_ms: 10,
            bridge: BridgeModel::Pull,
            generator: GeneratorConfig::default(),
            bind_address: SocketAddr::from(([127, 0, 0, 1], 9000)),
            report_path: None,
        }
    }
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(seed: u64, measured: bool, push: bool) -> Self {
        Self {
            bridge: if push {
                BridgeModel::Push
            } else {
                BridgeModel::Pull
            },
            generator: GeneratorConfig {
                mode: if measured {
                    TimingMode::Measured
                } else {
                    TimingMode::Synthetic
                },
                seed,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn poll_delay(&self) -> Duration {
        Duration::from_millis(self.poll_delay_ms)
    }

    pub fn to_render_config(&self) -> RenderConfig {
        RenderConfig {
            expected_total: self.expected_total,
        }
    }

    pub fn to_suite_info(&self) -> SuiteInfo {
        SuiteInfo {
            expected_total: self.expected_total,
            poll_delay_ms: self.poll_delay_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_from_args_produces_render_config() {
        let cfg = WorkflowConfig::from_args(7, false, true);
        assert_eq!(cfg.to_render_config().expected_total, Some(117));
        assert_eq!(cfg.bridge, BridgeModel::Push);
        assert_eq!(cfg.generator.seed, 7);
        assert_eq!(cfg.poll_delay(), Duration::from_millis(10));
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"expected_total: ~\npoll_delay_ms: 25\nbridge: push\ngenerator:\n  mode: measured\n  seed: 3\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let cfg = WorkflowConfig::load(&path).unwrap();
        assert_eq!(cfg.expected_total, None);
        assert_eq!(cfg.poll_delay_ms, 25);
        assert_eq!(cfg.generator.mode, TimingMode::Measured);
        assert_eq!(cfg.generator.jitter, 0.05);
        assert_eq!(cfg.bind_address.port(), 9000);
    }

    #[test]
    fn missing_config_reports_path() {
        let err = WorkflowConfig::load("/nonexistent/workflow.yaml").unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/workflow.yaml"));
    }
}
