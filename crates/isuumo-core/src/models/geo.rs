use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Request body of the nazotte search: the polygon's vertices in order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(default)]
    pub coordinates: Vec<Coordinate>,
}
