use serde::{Deserialize, Serialize};

use super::Coordinate;

/// A rental property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Estate {
    pub id: i64,
    pub thumbnail: String,
    pub name: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub rent: i64,
    pub door_height: i64,
    pub door_width: i64,
    pub features: String,
    #[serde(skip)]
    pub popularity: i64,
}

impl Estate {
    #[must_use]
    pub const fn position(&self) -> Coordinate {
        Coordinate {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EstateSearchResponse {
    pub count: i64,
    pub estates: Vec<Estate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EstateListResponse {
    pub estates: Vec<Estate>,
}
