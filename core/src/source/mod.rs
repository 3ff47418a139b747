//! Result sources unify the pull-style and push-style host bridges.

pub mod pull;
pub mod push;
pub mod replay;

pub use pull::PullSource;
pub use push::{PushHandle, PushSource};
pub use replay::ReplaySource;
