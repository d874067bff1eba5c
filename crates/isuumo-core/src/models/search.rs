use serde::{Deserialize, Serialize};

/// Raw chair search selections as received from the query string.
///
/// Everything stays textual here so validation (bucket ids, pagination)
/// happens in one place with one error contract.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChairSearchParams {
    pub price_range_id: Option<String>,
    pub height_range_id: Option<String>,
    pub width_range_id: Option<String>,
    pub depth_range_id: Option<String>,
    pub kind: Option<String>,
    pub color: Option<String>,
    pub features: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstateSearchParams {
    pub door_height_range_id: Option<String>,
    pub door_width_range_id: Option<String>,
    pub rent_range_id: Option<String>,
    pub features: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializeResponse {
    pub language: String,
}
