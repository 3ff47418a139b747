//! Benchmark result aggregation and rendering for the Ne10 demo front-ends.
//!
//! A host bridge hands out JSON batches of reference/NEON timings. The
//! [`render::Renderer`] pulls them through a [`prelude::ResultSource`],
//! accumulates speed-up ratios and drives any [`prelude::Surface`].

pub mod bridge;
pub mod math;
pub mod prelude;
pub mod render;
pub mod source;
pub mod telemetry;

pub use prelude::{BenchError, BenchResult, Delivery, ResultSource, Surface};
