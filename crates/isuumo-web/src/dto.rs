use serde::{Deserialize, Serialize};

use isuumo_core::models::Estate;

/// Body of the purchase and document request endpoints.
#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendedEstatesResponse<'a> {
    pub estates: &'a [Estate],
}
