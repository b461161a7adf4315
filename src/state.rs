// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::gemini::{GeminiClient, GenerateService};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub generator: Arc<dyn GenerateService>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let generator = GeminiClient::new(config.gemini_api_key.clone(), config.model.clone())?;
        Ok(Self {
            config,
            generator: Arc::new(generator),
        })
    }

    /// State with an injected generator, used by tests to avoid the network.
    pub fn with_generator(config: Config, generator: Arc<dyn GenerateService>) -> Self {
        Self { config, generator }
    }
}
