use tracing::info;

use crate::catalog::ChairSearchCondition;
use crate::error::{IsuumoError, Result};
use crate::models::{Chair, ChairListResponse, ChairSearchParams, ChairSearchResponse};
use crate::search::build_chair_search;

use super::Isuumo;

pub(super) const LOW_PRICED_LIMIT: usize = 20;

impl Isuumo {
    /// A chair that is still purchasable. Sold-out chairs are reported as
    /// missing.
    pub fn chair_detail(&self, id: i64) -> Result<Chair> {
        match self.state.get_chair(id)? {
            Some(chair) if chair.stock > 0 => Ok(chair),
            _ => Err(IsuumoError::NotFound(format!("chair {id}"))),
        }
    }

    pub fn search_chairs(&self, params: &ChairSearchParams) -> Result<ChairSearchResponse> {
        let query = build_chair_search(&self.conditions.chair, params, self.feature_throttle)?;
        self.state.search_chairs(&query)
    }

    pub fn low_priced_chairs(&self) -> Result<ChairListResponse> {
        Ok(ChairListResponse {
            chairs: self.state.low_priced_chairs(LOW_PRICED_LIMIT)?,
        })
    }

    #[must_use]
    pub fn chair_search_condition(&self) -> &ChairSearchCondition {
        &self.conditions.chair
    }

    pub fn buy_chair(&self, id: i64, email: &str) -> Result<()> {
        if email.is_empty() {
            return Err(IsuumoError::BadRequest("email is required".to_string()));
        }
        if !self.state.buy_chair(id)? {
            return Err(IsuumoError::NotFound(format!("chair {id}")));
        }
        info!(chair_id = id, "chair purchased");
        Ok(())
    }
}
