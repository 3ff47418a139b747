use crate::bridge::{decode_payload, encode_batch, BenchmarkRecord};
use crate::prelude::{BenchResult, Delivery, ResultSource};
use std::collections::VecDeque;

/// Replays a prepared sequence of raw bridge answers, then ends the stream.
#[derive(Debug, Default)]
pub struct ReplaySource {
    payloads: VecDeque<Option<String>>,
}

impl ReplaySource {
    pub fn new(payloads: impl IntoIterator<Item = Option<String>>) -> Self {
        Self {
            payloads: payloads.into_iter().collect(),
        }
    }

    pub fn from_batches(batches: Vec<Vec<BenchmarkRecord>>) -> BenchResult<Self> {
        let payloads = batches
            .iter()
            .map(|batch| encode_batch(Some(batch.as_slice())).map(Some))
            .collect::<BenchResult<Vec<_>>>()?;
        Ok(Self::new(payloads))
    }

    /// Reads a recorded run: a JSON array whose items are batches.
    pub fn from_recording(text: &str) -> BenchResult<Self> {
        let batches: Vec<Vec<BenchmarkRecord>> = serde_json::from_str(text)?;
        Self::from_batches(batches)
    }

    pub fn remaining(&self) -> usize {
        self.payloads.len()
    }
}

impl ResultSource for ReplaySource {
    fn next_delivery(&mut self) -> BenchResult<Delivery> {
        match self.payloads.pop_front() {
            Some(payload) => decode_payload(payload.as_deref()),
            None => Ok(Delivery::EndOfStream),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_replays_each_batch_then_ends() {
        let text = r#"[
            [{"name":"abs_float","time_c":10,"time_neon":5}],
            [{"name":"add_vec2","time_c":8,"time_neon":2},{"name":"add_vec3","time_c":9,"time_neon":3}]
        ]"#;
        let mut source = ReplaySource::from_recording(text).unwrap();
        assert_eq!(source.remaining(), 2);
        assert!(matches!(source.next_delivery().unwrap(), Delivery::Batch(ref r) if r.len() == 1));
        assert!(matches!(source.next_delivery().unwrap(), Delivery::Batch(ref r) if r.len() == 2));
        assert_eq!(source.next_delivery().unwrap(), Delivery::EndOfStream);
        assert_eq!(source.next_delivery().unwrap(), Delivery::EndOfStream);
    }
}
