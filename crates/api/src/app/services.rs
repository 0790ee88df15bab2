use std::sync::Arc;

use showroom_products::{InMemoryProductStore, ProductHandler, ProductStore};

use crate::config::ApiConfig;

/// Store handle shared across requests.
pub type SharedStore = Arc<dyn ProductStore>;

/// Application services injected into every route.
pub struct AppServices {
    pub products: ProductHandler<SharedStore>,
}

impl AppServices {
    pub fn new(store: SharedStore) -> Self {
        Self {
            products: ProductHandler::new(store),
        }
    }
}

/// Build the in-memory store described by `config` and wrap it in services.
pub fn build_services(config: &ApiConfig) -> AppServices {
    let store = if config.seed {
        InMemoryProductStore::seeded()
    } else {
        InMemoryProductStore::new()
    }
    .with_policy(config.duplicate_ids);

    tracing::debug!(products = store.len(), policy = ?store.policy(), "product store ready");
    AppServices::new(Arc::new(store))
}
