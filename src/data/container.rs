use crate::config::AppConfig;
use crate::data::repository::{NetworkRentalRepository, RentalRepository};
use crate::network::HttpRentalService;
use crate::ui::view_model::{RefreshOrdering, RentalViewModel};
use anyhow::Result;
use std::sync::Arc;
use tracing::info;

/// Composition root: builds the HTTP client and repository once and hands
/// them to every view model it creates
pub struct AppContainer {
    config: AppConfig,
    repository: Arc<dyn RentalRepository>,
}

impl AppContainer {
    pub fn new(config: AppConfig) -> Result<Self> {
        let service =
            HttpRentalService::new(config.base_url.clone(), config.timeout, config.http_log)?;
        info!(
            "Rental API at {} (http log: {}, timeout: {:?})",
            config.base_url, config.http_log, config.timeout
        );

        let repository = Arc::new(NetworkRentalRepository::new(service));
        Ok(Self::with_repository(config, repository))
    }

    /// Wire the container around an existing repository
    pub fn with_repository(config: AppConfig, repository: Arc<dyn RentalRepository>) -> Self {
        Self { config, repository }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url.as_str()
    }

    pub fn repository(&self) -> Arc<dyn RentalRepository> {
        Arc::clone(&self.repository)
    }

    /// Create a view model; its first fetch starts immediately.
    /// Must be called from within a tokio runtime.
    pub fn view_model(&self) -> RentalViewModel {
        RentalViewModel::new(self.repository())
    }

    pub fn view_model_with_ordering(&self, ordering: RefreshOrdering) -> RentalViewModel {
        RentalViewModel::with_ordering(self.repository(), ordering)
    }
}
