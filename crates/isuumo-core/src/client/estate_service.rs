use tracing::info;

use crate::catalog::EstateSearchCondition;
use crate::error::{IsuumoError, Result};
use crate::models::{Estate, EstateListResponse, EstateSearchParams, EstateSearchResponse};
use crate::search::build_estate_search;

use super::Isuumo;
use super::chair_service::LOW_PRICED_LIMIT;

impl Isuumo {
    pub fn estate_detail(&self, id: i64) -> Result<Estate> {
        self.state
            .get_estate(id)?
            .ok_or_else(|| IsuumoError::NotFound(format!("estate {id}")))
    }

    pub fn search_estates(&self, params: &EstateSearchParams) -> Result<EstateSearchResponse> {
        let query = build_estate_search(&self.conditions.estate, params, self.feature_throttle)?;
        self.state.search_estates(&query)
    }

    pub fn low_priced_estates(&self) -> Result<EstateListResponse> {
        Ok(EstateListResponse {
            estates: self.state.low_priced_estates(LOW_PRICED_LIMIT)?,
        })
    }

    #[must_use]
    pub fn estate_search_condition(&self) -> &EstateSearchCondition {
        &self.conditions.estate
    }

    pub fn request_estate_document(&self, id: i64, email: &str) -> Result<()> {
        if email.is_empty() {
            return Err(IsuumoError::BadRequest("email is required".to_string()));
        }
        if !self.state.estate_exists(id)? {
            return Err(IsuumoError::NotFound(format!("estate {id}")));
        }
        info!(estate_id = id, "estate document requested");
        Ok(())
    }
}
