use std::sync::Arc;

use tracing::debug;

use crate::error::{IsuumoError, Result};
use crate::models::Estate;
use crate::search::build_recommend_query;

use super::Isuumo;

impl Isuumo {
    /// Estates whose door admits the chair in some orientation. Results are
    /// memoized per chair until the estate catalog changes.
    pub fn recommended_estates(&self, chair_id: i64) -> Result<Arc<Vec<Estate>>> {
        self.recommendations.get_or_compute(chair_id, || {
            let chair = self
                .state
                .get_chair(chair_id)?
                .ok_or_else(|| IsuumoError::NotFound(format!("chair {chair_id}")))?;
            let query = build_recommend_query(chair.width, chair.height, chair.depth);
            let estates = self.state.recommend_estates(&query)?;
            debug!(chair_id, matched = estates.len(), "computed recommendations");
            Ok(estates)
        })
    }
}
