//! Shared state for the Telegram bot.

use std::sync::Arc;

use dailynewzz_core::{BotConfig, Controller, NewsApiClient, PreferenceStore};
use tracing::info;

use crate::error::Result;

/// State shared by every handler invocation.
pub struct TelegramState {
    controller: Controller,
}

impl TelegramState {
    /// Wrap an already-built controller.
    pub fn new(controller: Controller) -> Self {
        Self { controller }
    }

    /// Build the store and headlines client from configuration.
    pub fn from_config(config: &BotConfig) -> Result<Self> {
        let news = NewsApiClient::from_config(config)?;
        info!(
            endpoint = %news.endpoint(),
            country = %config.country,
            timeout_secs = config.request_timeout.as_secs(),
            "Headlines client ready"
        );
        Ok(Self::new(Controller::new(PreferenceStore::new(), Arc::new(news))))
    }

    /// The interaction controller.
    pub fn controller(&self) -> &Controller {
        &self.controller
    }
}

/// Create shared state wrapped in an Arc.
pub fn create_shared_state(config: &BotConfig) -> Result<Arc<TelegramState>> {
    Ok(Arc::new(TelegramState::from_config(config)?))
}
