use serde::{Deserialize, Serialize};

/// What a front-end needs to know before it starts polling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuiteInfo {
    pub expected_total: Option<usize>,
    pub poll_delay_ms: u64,
}
