use std::sync::Arc;

use anyhow::Result;

use crate::config::Config;
use crate::forecast::HistoricalAverageForecaster;
use crate::ingest;
use crate::store::ReadingStore;

/// Shared handler state.
///
/// The store is loaded exactly once here, before any route can observe it,
/// and everything behind the `Arc`s is read-only from then on, so requests
/// need no coordination. Picking up new source data means restarting.
#[derive(Clone)]
pub struct AppState {
    pub cfg: Config,
    pub store: Arc<ReadingStore>,
    pub forecaster: Arc<HistoricalAverageForecaster>,
}

impl AppState {
    pub fn new(cfg: Config) -> Result<Self> {
        let store = ingest::load_from_path(&cfg.data.csv_path)?;
        Ok(Self::from_store(cfg, store))
    }

    /// Build a state around an already-assembled store. Tests use this to
    /// skip the file system.
    pub fn from_store(cfg: Config, store: ReadingStore) -> Self {
        let store = Arc::new(store);
        let forecaster = Arc::new(HistoricalAverageForecaster::new(store.clone()));
        Self {
            cfg,
            store,
            forecaster,
        }
    }
}
