use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::catalog::SearchConditions;
use crate::config::{AppConfig, DEFAULT_FEATURE_THROTTLE_MS};
use crate::error::Result;
use crate::reco_cache::RecommendationCache;
use crate::state::SqliteCatalogStore;

mod chair_service;
mod estate_service;
mod ingest_service;
mod nazotte_service;
mod recommend_service;
mod runtime_service;

/// Service handle shared by every request worker. Cloning is cheap; all
/// clones see the same store, catalogs and recommendation cache.
#[derive(Clone)]
pub struct Isuumo {
    pub(crate) state: SqliteCatalogStore,
    conditions: Arc<SearchConditions>,
    recommendations: Arc<RecommendationCache>,
    feature_throttle: Duration,
}

impl std::fmt::Debug for Isuumo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Isuumo")
            .field("feature_throttle", &self.feature_throttle)
            .finish_non_exhaustive()
    }
}

impl Isuumo {
    /// Opens the catalog database with built-in search conditions and the
    /// default multi-feature throttle.
    pub fn new(db_path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            state: SqliteCatalogStore::open(db_path)?,
            conditions: Arc::new(SearchConditions::default()),
            recommendations: Arc::new(RecommendationCache::new()),
            feature_throttle: Duration::from_millis(DEFAULT_FEATURE_THROTTLE_MS),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let conditions = config.load_conditions()?;
        Ok(Self::new(&config.db_path)?
            .with_conditions(conditions)
            .with_feature_throttle(config.feature_throttle))
    }

    #[must_use]
    pub fn with_conditions(mut self, conditions: SearchConditions) -> Self {
        self.conditions = Arc::new(conditions);
        self
    }

    #[must_use]
    pub const fn with_feature_throttle(mut self, feature_throttle: Duration) -> Self {
        self.feature_throttle = feature_throttle;
        self
    }

    #[must_use]
    pub fn recommendation_cache(&self) -> &RecommendationCache {
        &self.recommendations
    }
}
