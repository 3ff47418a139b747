pub mod board;
pub mod layout;
pub mod progress;
pub mod renderer;
pub mod state;
pub mod summary;

pub use board::Board;
pub use layout::{format_value, Bar, BarBlock, BarColor, Legend, LegendEntry};
pub use progress::ProgressView;
pub use renderer::{Phase, PollOutcome, RenderConfig, Renderer, DEFAULT_EXPECTED_CASES};
pub use state::RunState;
pub use summary::Summary;
