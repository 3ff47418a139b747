pub mod payload;
pub mod record;

pub use payload::{decode_payload, encode_batch};
pub use record::BenchmarkRecord;
