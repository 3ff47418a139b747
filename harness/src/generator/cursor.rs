use crate::generator::catalog::{self, SuiteFunction};
use crate::generator::profile::{GeneratorConfig, TimingGenerator};
use benchcore::bridge::{encode_batch, BenchmarkRecord};
use benchcore::BenchResult;

/// Walks the suite one function per bridge call, like the native test runner.
pub struct SuiteCursor {
    functions: Vec<SuiteFunction>,
    position: usize,
    generator: TimingGenerator,
}

impl SuiteCursor {
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_functions(catalog::SUITE.to_vec(), config)
    }

    pub fn with_functions(functions: Vec<SuiteFunction>, config: GeneratorConfig) -> Self {
        Self {
            functions,
            position: 0,
            generator: TimingGenerator::new(config),
        }
    }

    pub fn total_cases(&self) -> usize {
        self.functions
            .iter()
            .map(|function| function.variants.len())
            .sum()
    }

    #[cfg(test)]
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.functions.len()
    }

    pub fn next_batch(&mut self) -> Option<Vec<BenchmarkRecord>> {
        let function = self.functions.get(self.position)?;
        self.position += 1;
        Some(self.generator.records_for(function))
    }

    /// Next batch as the bridge hands it out; `null` once exhausted.
    pub fn next_payload(&mut self) -> BenchResult<String> {
        let batch = self.next_batch();
        encode_batch(batch.as_deref())
    }

    /// Drains the remaining batches into a recording replayable later.
    pub fn record_remaining(&mut self) -> Vec<Vec<BenchmarkRecord>> {
        std::iter::from_fn(|| self.next_batch()).collect()
    }

    pub fn reset(&mut self) {
        self.position = 0;
        self.generator.reseed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchcore::bridge::decode_payload;
    use benchcore::Delivery;

    #[test]
    fn cursor_hands_out_each_function_then_null() {
        let mut cursor = SuiteCursor::new(GeneratorConfig::default());
        let mut cases = 0;
        let mut batches = 0;
        while let Delivery::Batch(records) =
            decode_payload(Some(&cursor.next_payload().unwrap())).unwrap()
        {
            cases += records.len();
            batches += 1;
        }
        assert_eq!(batches, 30);
        assert_eq!(cases, cursor.total_cases());
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.next_payload().unwrap(), "null");
    }

    #[test]
    fn reset_rewinds_to_first_function() {
        let mut cursor = SuiteCursor::new(GeneratorConfig::default());
        let first = cursor.next_batch().unwrap();
        cursor.next_batch();
        cursor.reset();
        assert_eq!(cursor.next_batch().unwrap(), first);
    }

    #[test]
    fn recording_contains_every_remaining_batch() {
        let mut cursor = SuiteCursor::new(GeneratorConfig::default());
        cursor.next_batch();
        assert_eq!(cursor.record_remaining().len(), 29);
        assert!(cursor.next_batch().is_none());
    }
}
