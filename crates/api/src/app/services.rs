use std::sync::Arc;

use tracing::{info, warn};

use stockpulse_ai::InsightAggregator;
use stockpulse_infra::{
    AppConfig, CatalogReader, InMemoryCatalog, InsightService, PostgresCatalog, StoreError,
};

/// Type-erased catalog so one router serves every backing store.
pub type SharedCatalog = Arc<dyn CatalogReader>;

pub struct AppServices {
    insight_service: InsightService<SharedCatalog>,
}

impl AppServices {
    pub fn new(catalog: SharedCatalog, aggregator: InsightAggregator) -> Self {
        Self {
            insight_service: InsightService::with_aggregator(catalog, aggregator),
        }
    }

    pub fn insight_service(&self) -> &InsightService<SharedCatalog> {
        &self.insight_service
    }
}

/// Pick the catalog backend from config: Postgres, a JSON seed, or empty.
pub fn build_services(config: &AppConfig) -> Result<AppServices, StoreError> {
    let catalog: SharedCatalog = match (&config.database_url, &config.seed_file) {
        (Some(url), _) => {
            info!("using postgres catalog");
            Arc::new(PostgresCatalog::connect_lazy(url)?)
        }
        (None, Some(path)) => {
            info!(path = %path.display(), "using in-memory catalog from seed file");
            Arc::new(InMemoryCatalog::from_json_file(path)?)
        }
        (None, None) => {
            warn!("neither DATABASE_URL nor SEED_FILE set; serving an empty in-memory catalog");
            Arc::new(InMemoryCatalog::new())
        }
    };

    Ok(AppServices::new(catalog, config.aggregator()))
}
