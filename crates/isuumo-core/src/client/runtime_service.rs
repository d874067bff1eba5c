use tracing::info;

use crate::error::Result;
use crate::models::InitializeResponse;

use super::Isuumo;

const IMPLEMENTATION_LANGUAGE: &str = "rust";

impl Isuumo {
    /// Empties both catalogs and the recommendation cache.
    pub fn initialize(&self) -> Result<InitializeResponse> {
        self.state.reset()?;
        self.recommendations.invalidate_all()?;
        info!("catalog reset");
        Ok(InitializeResponse {
            language: IMPLEMENTATION_LANGUAGE.to_string(),
        })
    }
}
