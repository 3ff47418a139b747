use log::{info, warn};

/// Thin wrapper over the `log` facade that tags entries with their origin.
pub struct LogManager {
    origin: &'static str,
}

impl LogManager {
    pub fn new(origin: &'static str) -> Self {
        Self { origin }
    }

    pub fn record(&self, message: &str) {
        info!("[{}] {}", self.origin, message);
    }

    pub fn caution(&self, message: &str) {
        warn!("[{}] {}", self.origin, message);
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new("benchcore")
    }
}
