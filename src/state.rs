use crate::config::Config;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Stands in for the processing time of a real OCR or model call.
    pub async fn simulate_latency(&self) {
        if !self.config.mock_delay.is_zero() {
            tokio::time::sleep(self.config.mock_delay).await;
        }
    }
}
