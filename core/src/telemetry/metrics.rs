use std::sync::Mutex;

/// Counters collected while a run is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub polls: usize,
    pub batches: usize,
    pub records: usize,
    pub degenerate: usize,
    pub finalized: usize,
}

pub struct MetricsRecorder {
    inner: Mutex<MetricsSnapshot>,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MetricsSnapshot::default()),
        }
    }

    pub fn record_poll(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.polls += 1;
        }
    }

    pub fn record_batch(&self, records: usize) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.batches += 1;
            metrics.records += records;
        }
    }

    pub fn record_degenerate(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.degenerate += 1;
        }
    }

    pub fn record_finalized(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.finalized += 1;
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        if let Ok(metrics) = self.inner.lock() {
            *metrics
        } else {
            MetricsSnapshot::default()
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batches_accumulate_record_counts() {
        let metrics = MetricsRecorder::new();
        metrics.record_batch(3);
        metrics.record_batch(4);
        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.batches, 2);
        assert_eq!(snapshot.records, 7);
    }
}
