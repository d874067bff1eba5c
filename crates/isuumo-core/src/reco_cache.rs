use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::{debug, info};

use crate::error::{IsuumoError, Result};
use crate::models::Estate;

/// Memoized chair → recommended estates, shared by all request workers.
///
/// The lock is only held for the map read or the map write, never while the
/// recommendation is being computed. Two concurrent misses for the same chair
/// may both compute; the later insert wins and both results are equivalent.
#[derive(Debug, Default)]
pub struct RecommendationCache {
    entries: RwLock<HashMap<i64, Arc<Vec<Estate>>>>,
}

impl RecommendationCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, chair_id: i64) -> Result<Option<Arc<Vec<Estate>>>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| IsuumoError::lock_poisoned("recommendation cache"))?;
        Ok(entries.get(&chair_id).cloned())
    }

    pub fn insert(&self, chair_id: i64, estates: Vec<Estate>) -> Result<Arc<Vec<Estate>>> {
        let estates = Arc::new(estates);
        let mut entries = self
            .entries
            .write()
            .map_err(|_| IsuumoError::lock_poisoned("recommendation cache"))?;
        entries.insert(chair_id, Arc::clone(&estates));
        Ok(estates)
    }

    /// Returns the cached list or runs `compute` outside the lock and caches
    /// its result. Errors are returned as-is and never cached.
    pub fn get_or_compute(
        &self,
        chair_id: i64,
        compute: impl FnOnce() -> Result<Vec<Estate>>,
    ) -> Result<Arc<Vec<Estate>>> {
        if let Some(hit) = self.get(chair_id)? {
            debug!(chair_id, "recommendation cache hit");
            return Ok(hit);
        }
        let estates = compute()?;
        self.insert(chair_id, estates)
    }

    /// Drops every entry. Must complete before an estate bulk replace reports
    /// success to its caller.
    pub fn invalidate_all(&self) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| IsuumoError::lock_poisoned("recommendation cache"))?;
        let dropped = entries.len();
        entries.clear();
        info!(dropped, "recommendation cache invalidated");
        Ok(())
    }

    pub fn len(&self) -> Result<usize> {
        let entries = self
            .entries
            .read()
            .map_err(|_| IsuumoError::lock_poisoned("recommendation cache"))?;
        Ok(entries.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}
