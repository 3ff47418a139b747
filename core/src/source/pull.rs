use crate::bridge::decode_payload;
use crate::prelude::{BenchResult, Delivery, ResultSource};

/// Pull-model source: each poll invokes the zero-argument bridge call.
pub struct PullSource<F> {
    call: F,
}

impl<F> PullSource<F>
where
    F: FnMut() -> Option<String>,
{
    pub fn new(call: F) -> Self {
        Self { call }
    }
}

impl<F> ResultSource for PullSource<F>
where
    F: FnMut() -> Option<String>,
{
    fn next_delivery(&mut self) -> BenchResult<Delivery> {
        let raw = (self.call)();
        decode_payload(raw.as_deref())
    }
}
