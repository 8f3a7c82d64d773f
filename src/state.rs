use std::sync::Arc;

use tracing::info;

use crate::{config::Config, error::LoadError, limit::RateLimiter, store::Store};

/// Everything a handler needs, built once at startup. The store is immutable
/// after load, so handlers share it with no locking; the rate limiter guards
/// its own counters.
pub struct AppState {
    pub config: Config,
    pub store: Store,
    pub limiter: RateLimiter,
}

impl AppState {
    pub fn new() -> Result<Arc<Self>, LoadError> {
        let config = Config::load();

        let store = Store::load(&config.questions_path)?;
        info!("Loaded {} questions from {}", store.len(), config.questions_path.display());

        let limiter = RateLimiter::new(config.rate_limit_per_minute);

        Ok(Arc::new(Self {
            config,
            store,
            limiter,
        }))
    }
}
